//! `css-doctor config` — inspect the effective configuration.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::app::AppContext;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration and derived paths
    Show,
    /// Print the configuration file location
    Path,
}

/// Run a config subcommand.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn run(app: &AppContext, cmd: &ConfigCommand) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cmd {
        ConfigCommand::Show => app
            .renderer()
            .render_config(&app.config, &app.config_path, app.config_found, &mut out)
            .context("writing configuration"),
        ConfigCommand::Path => writeln!(out, "{}", app.config_path.display())
            .context("writing configuration path"),
    }
}
