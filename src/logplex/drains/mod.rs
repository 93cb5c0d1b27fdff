//! Drains module - attach and detach log drains on a channel

mod api;
mod commands;
mod models;

pub use commands::run_drain_command;
pub use models::{AddDrainRequest, DrainResponse};
