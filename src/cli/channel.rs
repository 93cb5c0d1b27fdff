//! Channel subcommands and arguments

use clap::{Args, Subcommand};

/// Actions for the 'channel' command
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ChannelCommand {
    /// Create a channel with one or more tokens
    Create(CreateChannelArgs),

    /// Destroy a channel
    Destroy(DestroyChannelArgs),
}

/// Arguments for 'channel create'
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateChannelArgs {
    /// Channel name
    pub name: String,

    /// Token names to create on the channel
    #[arg(required = true, num_args = 1.., value_name = "TOKEN")]
    pub tokens: Vec<String>,
}

/// Arguments for 'channel destroy'
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DestroyChannelArgs {
    /// Channel ID
    pub channel_id: String,
}
