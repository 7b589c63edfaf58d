//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()` from the top-level flags: the
//! configuration is loaded and validated here and nowhere else.

use std::path::PathBuf;

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::DoctorConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, OutputContext};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Explicit configuration file (`--config` / `CSS_DOCTOR_CONFIG`).
    pub config: Option<PathBuf>,
    /// Disable ANSI color output.
    pub no_color: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, TTY detection).
    pub output: OutputContext,
    /// Effective configuration.
    pub config: DoctorConfig,
    /// Where the configuration was (or would be) read from.
    pub config_path: PathBuf,
    /// Whether `config_path` holds a file; `false` means built-in defaults.
    pub config_found: bool,
    /// Process runner shared by the compiler adapter and the status query.
    pub runner: TokioCommandRunner,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be located, read, parsed
    /// or validated.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let store = YamlConfigStore::new(flags.config.clone());
        let config = store.load()?;
        let config_path = store.path()?;
        let config_found = store.has_file()?;

        Ok(Self {
            output: OutputContext::new(flags.no_color),
            config,
            config_path,
            config_found,
            runner: TokioCommandRunner,
        })
    }

    /// Renderer for the current output context and configuration.
    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output, self.config.preview_chars)
    }
}
