//! Logplex API client module
//!
//! Settings resolution, the HTTP client and the channel/drain operations.

pub mod channels;
mod client;
pub mod drains;
pub mod settings;

pub use channels::{run_channel_command, CreateChannelRequest, CreateChannelResponse};
pub use client::LogplexClient;
pub use drains::{run_drain_command, AddDrainRequest, DrainResponse};
pub use settings::{EnvSettings, Settings, TransportOptions};

use crate::cli::Command;
use crate::error::Result;
use crate::output::CommandOutput;

/// Dispatch a parsed command to its handler
pub async fn run_command(
    client: &LogplexClient,
    command: &Command,
    quiet: bool,
) -> Result<CommandOutput> {
    match command {
        Command::Channel { action } => run_channel_command(client, action, quiet).await,
        Command::Drain { action } => run_drain_command(client, action, quiet).await,
    }
}
