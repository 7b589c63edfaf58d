//! Shared test helpers: mock port implementations and output constructors.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::time::Duration;

use anyhow::Result;
use css_doctor::application::ports::{
    AssetFiles, CommandRunner, ProgressReporter, StyleCompiler,
};
use css_doctor::domain::{CommandError, CompileOutcome, FileEntry, LessVariables};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Mock: no-op progress reporter ────────────────────────────────────────────

pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
}

/// Records every progress message in order.
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.borrow_mut().push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(format!("success: {message}"));
    }
}

// ── Mock: in-memory storefront tree ──────────────────────────────────────────

/// In-memory `AssetFiles`. `glob_files` returns the configured entries as-is.
#[derive(Default)]
pub struct MemoryFiles {
    pub texts: HashMap<PathBuf, String>,
    pub unreadable: Vec<PathBuf>,
    pub matches: Vec<FileEntry>,
    pub glob_error: Option<String>,
}

impl MemoryFiles {
    pub fn with_text(mut self, path: impl Into<PathBuf>, text: &str) -> Self {
        self.texts.insert(path.into(), text.to_string());
        self
    }

    pub fn with_match(mut self, path: impl Into<PathBuf>, size: u64) -> Self {
        self.matches.push(FileEntry {
            path: path.into(),
            size,
        });
        self
    }
}

impl AssetFiles for MemoryFiles {
    fn read_to_string(&self, path: &Path) -> Result<Option<String>> {
        if self.unreadable.iter().any(|p| p == path) {
            anyhow::bail!("reading file {}: permission denied", path.display());
        }
        Ok(self.texts.get(path).cloned())
    }

    fn glob_files(&self, _pattern: &str) -> Result<Vec<FileEntry>> {
        if let Some(err) = &self.glob_error {
            anyhow::bail!("{err}");
        }
        Ok(self.matches.clone())
    }
}

// ── Mock: style compiler ─────────────────────────────────────────────────────

/// Returns a canned outcome per source path and records each call.
#[derive(Default)]
pub struct ScriptedCompiler {
    pub outcomes: HashMap<PathBuf, CompileOutcome>,
    pub calls: RefCell<Vec<(PathBuf, LessVariables)>>,
}

impl ScriptedCompiler {
    pub fn with(mut self, source: impl Into<PathBuf>, outcome: CompileOutcome) -> Self {
        self.outcomes.insert(source.into(), outcome);
        self
    }
}

impl StyleCompiler for ScriptedCompiler {
    async fn compile(&self, source: &Path, variables: &LessVariables) -> CompileOutcome {
        self.calls
            .borrow_mut()
            .push((source.to_path_buf(), variables.clone()));
        self.outcomes.get(source).cloned().unwrap_or_else(|| {
            CompileOutcome::failure("FileError", format!("'{}' wasn't found", source.display()))
        })
    }
}

// ── Mock: command runner ─────────────────────────────────────────────────────

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub dir: Option<PathBuf>,
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

/// Replies with a fixed result and records invocations.
pub struct FakeRunner {
    reply: Box<dyn Fn() -> Result<Output>>,
    pub calls: RefCell<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn replying(output: Output) -> Self {
        Self {
            reply: Box::new(move || Ok(output.clone())),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_to_spawn(program: &'static str) -> Self {
        Self {
            reply: Box::new(move || {
                Err(CommandError::Spawn {
                    program: program.to_string(),
                    reason: "No such file or directory (os error 2)".to_string(),
                }
                .into())
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn timing_out(program: &'static str, secs: u64) -> Self {
        Self {
            reply: Box::new(move || {
                Err(CommandError::Timeout {
                    program: program.to_string(),
                    secs,
                }
                .into())
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn record(&self, dir: Option<&Path>, program: &str, args: &[&str], timeout: Duration) {
        self.calls.borrow_mut().push(Invocation {
            dir: dir.map(Path::to_path_buf),
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            timeout,
        });
    }
}

impl CommandRunner for FakeRunner {
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        self.record(None, program, args, timeout);
        (self.reply)()
    }

    async fn run_in_dir(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        self.record(Some(dir), program, args, timeout);
        (self.reply)()
    }
}
