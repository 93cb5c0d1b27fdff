//! Channel command handlers

use log::debug;

use crate::cli::ChannelCommand;
use crate::error::Result;
use crate::logplex::LogplexClient;
use crate::output::CommandOutput;
use crate::ui::{create_spinner, finish_spinner};

use super::models::CreateChannelRequest;

/// Run a `channel` subcommand
pub async fn run_channel_command(
    client: &LogplexClient,
    command: &ChannelCommand,
    quiet: bool,
) -> Result<CommandOutput> {
    match command {
        ChannelCommand::Create(args) => {
            let request = CreateChannelRequest::new(&args.name, &args.tokens);
            let spinner = create_spinner(&format!("Creating channel '{}'...", args.name), quiet);
            let result = client.create_channel(&request).await;
            finish_spinner(spinner);
            Ok(CommandOutput::Channel(result?))
        }
        ChannelCommand::Destroy(args) => {
            let spinner = create_spinner(
                &format!("Destroying channel '{}'...", args.channel_id),
                quiet,
            );
            let result = client.destroy_channel(&args.channel_id).await;
            finish_spinner(spinner);
            result?;
            debug!("Channel {} destroyed", args.channel_id);
            Ok(CommandOutput::empty())
        }
    }
}
