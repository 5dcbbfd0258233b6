//! CLI command definitions for the `helpdesk` binary.

pub mod ask;
pub mod chat;
pub mod config;
pub mod rules;

use std::path::Path;

use clap::{Parser, Subcommand};

use helpdesk_infra::config::{default_config_path, load_effective_config};
use helpdesk_types::config::AssistantConfig;

/// Ask the migration platform's help assistant.
#[derive(Parser)]
#[command(name = "helpdesk", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.helpdesk/config.toml).
    #[arg(long, global = true, env = "HELPDESK_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    /// Answer from the built-in rules only, never calling the remote model.
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Ask a single question and print the answer.
    Ask {
        /// The question.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the built-in answer rules in evaluation order.
    Rules {
        /// Show which rule answers this text.
        #[arg(long, value_name = "TEXT")]
        explain: Option<String>,
    },

    /// Show the effective configuration (API key redacted).
    Config,
}

/// Load the config file plus `AZURE_OPENAI_*` overrides; `--offline` disables the remote path.
pub async fn load_config(path: Option<&Path>, offline: bool) -> AssistantConfig {
    let path = path.map_or_else(default_config_path, Path::to_path_buf);
    let mut config = load_effective_config(&path).await;
    if offline {
        config.use_remote = false;
    }
    config
}
