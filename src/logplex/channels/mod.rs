//! Channels module - create and destroy log channels

mod api;
mod commands;
mod models;

pub(crate) use api::channel_path;
pub use commands::run_channel_command;
pub use models::{CreateChannelRequest, CreateChannelResponse};
