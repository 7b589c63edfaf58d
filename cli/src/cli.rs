//! CLI argument parsing with clap derive

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Diagnose why storefront CSS compilation produces empty or stale output
#[derive(Parser)]
#[command(name = "css-doctor", version, propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ~/.css-doctor/config.yaml)
    #[arg(long, global = true, env = "CSS_DOCTOR_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the five-step CSS compilation diagnosis (default)
    Diagnose,

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable or output fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            config,
            no_color,
            command,
        } = self;
        let app = AppContext::new(&AppFlags { config, no_color })?;
        match command.unwrap_or(Command::Diagnose) {
            Command::Diagnose => commands::diagnose::run(&app).await,
            Command::Config(cmd) => commands::config::run(&app, &cmd),
        }
    }
}
