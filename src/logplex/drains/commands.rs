//! Drain command handlers

use crate::cli::DrainCommand;
use crate::error::Result;
use crate::logplex::LogplexClient;
use crate::output::CommandOutput;
use crate::ui::{create_spinner, finish_spinner};

/// Run a `drain` subcommand
pub async fn run_drain_command(
    client: &LogplexClient,
    command: &DrainCommand,
    quiet: bool,
) -> Result<CommandOutput> {
    match command {
        DrainCommand::Add(args) => {
            let spinner = create_spinner(
                &format!("Adding drain to channel '{}'...", args.channel_id),
                quiet,
            );
            let result = client.add_drain(&args.channel_id, &args.drain_url).await;
            finish_spinner(spinner);
            Ok(CommandOutput::Drain(result?))
        }
        DrainCommand::Remove(args) => {
            let spinner = create_spinner(
                &format!(
                    "Removing drain '{}' from channel '{}'...",
                    args.drain_id, args.channel_id
                ),
                quiet,
            );
            let result = client.remove_drain(&args.channel_id, &args.drain_id).await;
            finish_spinner(spinner);
            result?;
            Ok(CommandOutput::empty())
        }
    }
}
