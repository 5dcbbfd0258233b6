//! Helpdesk assistant CLI entry point.
//!
//! Binary name: `helpdesk`
//!
//! Parses CLI arguments, loads the assistant configuration, then dispatches
//! to the requested command.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,helpdesk_core=debug,helpdesk_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli::load_config(cli.config.as_deref(), cli.offline).await;

    match cli.command {
        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&config).await?;
        }
        Commands::Ask { text } => {
            cli::ask::ask(&config, &text.join(" "), cli.json).await?;
        }
        Commands::Rules { explain } => {
            cli::rules::rules(explain.as_deref(), cli.json)?;
        }
        Commands::Config => {
            cli::config::show_config(&config, cli.json)?;
        }
    }

    Ok(())
}
