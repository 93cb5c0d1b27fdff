//! Drain subcommands and arguments

use clap::{Args, Subcommand};

/// Actions for the 'drain' command
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DrainCommand {
    /// Add a drain to a channel
    Add(AddDrainArgs),

    /// Remove a drain from a channel
    Remove(RemoveDrainArgs),
}

/// Arguments for 'drain add'
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddDrainArgs {
    /// Channel ID
    pub channel_id: String,

    /// Drain destination URL (e.g. syslog://host:port or https://...)
    pub drain_url: String,
}

/// Arguments for 'drain remove'
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RemoveDrainArgs {
    /// Channel ID
    pub channel_id: String,

    /// Drain ID
    pub drain_id: String,
}
