// CLI module for provider-gate
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// provider-gate - HTTP gateway for a chat-completion API and S3-compatible storage
#[derive(Parser, Debug)]
#[command(name = "provider-gate", version, about, long_about = None)]
pub struct Args {
    /// Config file to load instead of searching ./config.* and ./config/config.*
    #[arg(short, long, env = "APP_CONFIG_FILE")]
    pub config: Option<PathBuf>,
}
