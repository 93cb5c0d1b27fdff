//! Output formatting
//!
//! Every successful command prints exactly one compact JSON line on stdout.

use serde::Serialize;

use crate::error::Result;
use crate::logplex::{CreateChannelResponse, DrainResponse};

/// Result of a delete-type command, serialized as `{}`
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyResult {}

/// Successful result of any command
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CommandOutput {
    Channel(CreateChannelResponse),
    Drain(DrainResponse),
    Empty(EmptyResult),
}

impl CommandOutput {
    pub fn empty() -> Self {
        CommandOutput::Empty(EmptyResult::default())
    }

    /// Render as a single line of JSON
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Print a command result to stdout
pub fn print_json(output: &CommandOutput) -> Result<()> {
    println!("{}", output.to_json_line()?);
    Ok(())
}
