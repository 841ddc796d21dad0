//! Axum-based HTTP server for provider-gate.
//!
//! # Components
//!
//! - `handlers`: The `/health`, `/chat`, `/upload` and `/metrics` endpoints.
//! - `middleware`: Request ID propagation and request metrics.
//! - `routes`: Shared state, client construction and the router.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
