//! Hypercars CLI - Wishlist script replay and validation.
//!
//! # Usage
//!
//! ```bash
//! # Replay a script, logging every wishlist snapshot
//! hc-cli replay wishlist.yaml
//!
//! # Replay and print the final wishlist and cart as JSON
//! hc-cli replay wishlist.yaml --json
//!
//! # Validate a script without running it
//! hc-cli check wishlist.yaml
//! ```
//!
//! # Commands
//!
//! - `replay` - Apply a script to a fresh in-memory wishlist
//! - `check` - Parse and validate a script

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliConfig, LogFormat};

mod commands;
mod config;
mod script;

#[derive(Parser)]
#[command(name = "hc-cli")]
#[command(author, version, about = "Hypercars wishlist tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a wishlist script against a fresh store
    Replay {
        /// Path to the YAML script
        file: PathBuf,

        /// Print the final wishlist and cart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Parse and validate a wishlist script
    Check {
        /// Path to the YAML script
        file: PathBuf,
    },
}

fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hypercars_cli=info,hypercars_wishlist=info".into());

    let json_layer = (format == LogFormat::Json)
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (format == LogFormat::Text).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Replay { file, json } => commands::replay::run(&file, json, config).await?,
        Commands::Check { file } => commands::check::run(&file).await?,
    }
    Ok(())
}
