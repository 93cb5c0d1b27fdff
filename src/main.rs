//! logplex-cli - main entry point

use clap::Parser;
use log::{debug, info};

use logplex_cli::config::defaults;
use logplex_cli::{print_json, run_command, Cli, EnvSettings, LogplexClient, Result};

#[tokio::main]
async fn main() {
    // Usage errors exit here with status 2 before any configuration is read
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let env_settings = EnvSettings::from_env()?;

    // Initialize logging
    let log_level = if env_settings.debug {
        defaults::DEBUG_LOG_LEVEL
    } else {
        cli.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    info!("Starting logplex-cli v{}", env!("CARGO_PKG_VERSION"));

    let settings = env_settings.resolve()?;
    debug!("Config => {:?}", settings);
    debug!("Command => {:?}", cli.command);

    let client = LogplexClient::new(&settings)?;
    let output = run_command(&client, &cli.command, cli.batch).await?;
    print_json(&output)?;

    info!("Completed successfully");
    Ok(())
}
