//! logplex-cli - manage Logplex channels and drains
//!
//! A small CLI for the Logplex administrative API.
//!
//! # Features
//!
//! - Create and destroy channels
//! - Add and remove drains on a channel
//! - Endpoint derived from the Heroku cloud name when not set explicitly
//! - One line of JSON on stdout per invocation, for scripting
//!
//! # Example
//!
//! ```bash
//! export LOGPLEX_AUTH_KEY=...
//! export HEROKU_CLOUD=production
//!
//! # Create a channel with two tokens
//! logplex-cli channel create my-app app heroku
//!
//! # Attach a syslog drain
//! logplex-cli drain add 42 syslog://logs.example.com:514
//!
//! # Detach it again, then remove the channel
//! logplex-cli drain remove 42 7
//! logplex-cli channel destroy 42
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logplex;
pub mod output;
pub mod ui;

pub use cli::{
    AddDrainArgs, ChannelCommand, Cli, Command, CreateChannelArgs, DestroyChannelArgs,
    DrainCommand, RemoveDrainArgs,
};
pub use error::{LogplexError, Result};
pub use logplex::{
    run_command, CreateChannelRequest, CreateChannelResponse, DrainResponse, EnvSettings,
    LogplexClient, Settings, TransportOptions,
};
pub use output::{print_json, CommandOutput, EmptyResult};
