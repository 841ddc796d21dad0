//! Utility functions and helpers for provider-gate.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and secret redaction.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
