//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised when a loaded configuration cannot drive a diagnosis.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("root must be an absolute path, got '{0}'")]
    RelativeRoot(String),

    #[error("{field} must be a single non-empty path segment, got '{value}'")]
    InvalidThemeSegment { field: &'static str, value: String },

    #[error("compiler.program must not be empty")]
    EmptyCompiler,

    #[error("status_command.program must not be empty")]
    EmptyStatusCommand,

    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),

    #[error("variant '{0}' has no source file")]
    EmptyVariantSource(String),
}

// ── Command errors ────────────────────────────────────────────────────────────

/// Failures of an external process that never produced a usable result.
///
/// Infrastructure returns these inside `anyhow::Error`; callers that need to
/// tell them apart use `downcast_ref`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to start {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },
}

impl CommandError {
    /// Short, stable name of the failure used as a compile failure kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Spawn { .. } => "SpawnError",
            Self::Timeout { .. } => "TimeoutError",
        }
    }
}
