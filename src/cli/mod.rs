//! CLI argument parsing

mod channel;
mod drain;

use clap::{Parser, Subcommand};

use crate::config::{defaults, env};

pub use channel::{ChannelCommand, CreateChannelArgs, DestroyChannelArgs};
pub use drain::{AddDrainArgs, DrainCommand, RemoveDrainArgs};

/// Logplex CLI
#[derive(Parser, Debug)]
#[command(name = "logplex-cli")]
#[command(version)]
#[command(about = "Manage Logplex channels and drains", long_about = None)]
#[command(after_help = "Environment:\n  \
    LOGPLEX_AUTH_KEY       API auth key (required)\n  \
    LOGPLEX_ENDPOINT       API endpoint (overrides HEROKU_CLOUD)\n  \
    HEROKU_CLOUD           Cloud name used to derive the endpoint\n  \
    SSL_INSECURE           Skip TLS certificate verification\n  \
    DEBUG                  Log settings and requests to stderr")]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = env::LOG_LEVEL, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no progress spinner
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level resources
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create or destroy channels
    Channel {
        #[command(subcommand)]
        action: ChannelCommand,
    },

    /// Add or remove drains on a channel
    Drain {
        #[command(subcommand)]
        action: DrainCommand,
    },
}
