// provider-gate - HTTP gateway for a chat-completion API and S3-compatible storage
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod storage;
pub mod utils;
