//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{CompileOutcome, DoctorConfig, FileEntry, LessVariables};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;

    /// Run a program from `dir` and capture its output.
    ///
    /// # Errors
    ///
    /// Same as [`CommandRunner::run_with_timeout`].
    async fn run_in_dir(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

// ── Style Compiler Port ───────────────────────────────────────────────────────

/// Compiles a LESS source with variables defined before parsing.
///
/// Implementations never fail: every problem is a [`CompileOutcome::Failure`].
#[allow(async_fn_in_trait)]
pub trait StyleCompiler {
    async fn compile(&self, source: &Path, variables: &LessVariables) -> CompileOutcome;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Read-only access to the storefront tree.
pub trait AssetFiles {
    /// Read a text file, returning `None` when nothing exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path exists but cannot be read as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<Option<String>>;

    /// Resolve a wildcard pattern to the regular files it matches, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern itself is invalid.
    fn glob_files(&self, pattern: &str) -> Result<Vec<FileEntry>>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts where the configuration lives and how it is loaded.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when the default
    /// location holds no file.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed, or if an
    /// explicitly requested file is missing.
    fn load(&self) -> Result<DoctorConfig>;

    /// Location of the configuration file (which may not exist).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;

    /// Whether a file exists at [`ConfigStore::path`].
    ///
    /// # Errors
    ///
    /// Same as [`ConfigStore::path`].
    fn has_file(&self) -> Result<bool>;
}
