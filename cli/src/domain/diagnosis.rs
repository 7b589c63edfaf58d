//! Diagnosis domain types and pure text helpers.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use std::path::{Path, PathBuf};

use crate::domain::config::LessVariables;
use crate::domain::remediation::RemediationPlan;

// ── Step 1: sources ───────────────────────────────────────────────────────────

/// How much of a source file the report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectMode {
    /// The whole file.
    Full,
    /// Only the first `n` lines.
    Excerpt(usize),
}

/// What was found at a source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceContent {
    /// Nothing exists at the path.
    Missing,
    /// The path exists but could not be read as text.
    Unreadable(String),
    /// File text, already cut to the inspect mode.
    Text(String),
}

/// Result of inspecting one source stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInspection {
    /// Name shown in the report, relative to the theme's `web/css` directory.
    pub name: String,
    /// Absolute path that was read.
    pub path: PathBuf,
    pub mode: InspectMode,
    pub content: SourceContent,
}

// ── Step 2: compilation ───────────────────────────────────────────────────────

/// Compiled CSS produced by the style compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledStyle {
    pub css: String,
}

impl CompiledStyle {
    /// Size of the compiled output in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.css.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }

    /// The first `chars` characters of the output.
    #[must_use]
    pub fn preview(&self, chars: usize) -> &str {
        char_prefix(&self.css, chars)
    }
}

/// Outcome of one compilation attempt. Never an `Err`: failures are values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileOutcome {
    /// Non-empty CSS.
    Success(CompiledStyle),
    /// The compiler reported no error but produced zero bytes.
    EmptyOutput,
    /// The compiler rejected the input or could not run.
    Failure { kind: String, message: String },
}

impl CompileOutcome {
    /// Classify compiler output: zero bytes is [`CompileOutcome::EmptyOutput`].
    #[must_use]
    pub fn from_css(css: String) -> Self {
        if css.is_empty() {
            Self::EmptyOutput
        } else {
            Self::Success(CompiledStyle { css })
        }
    }

    #[must_use]
    pub fn failure(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// One compiled variant with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileAttempt {
    pub label: String,
    pub source: PathBuf,
    pub variables: LessVariables,
    pub outcome: CompileOutcome,
}

// ── Step 3: application mode ──────────────────────────────────────────────────

/// Raw answer of the application status command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeQuery {
    /// Combined stdout and stderr, untouched.
    Output(String),
    /// The command could not be run; carries the reason.
    Unavailable(String),
}

// ── Step 4: deployed artifacts ────────────────────────────────────────────────

/// A regular file matched by a glob, with its size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
}

/// A previously deployed stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedArtifact {
    /// Path relative to `<root>/pub/static`.
    pub relative_path: String,
    pub size: u64,
}

impl DeployedArtifact {
    /// Build an artifact from a file entry, stripping `base` from its path.
    ///
    /// Paths outside `base` are kept whole.
    #[must_use]
    pub fn from_entry(entry: &FileEntry, base: &Path) -> Self {
        let rel = entry.path.strip_prefix(base).unwrap_or(&entry.path);
        Self {
            relative_path: rel.display().to_string(),
            size: entry.size,
        }
    }
}

/// Everything step 4 found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedListing {
    pub pattern: String,
    pub artifacts: Vec<DeployedArtifact>,
    /// Set when the pattern could not be resolved at all.
    pub error: Option<String>,
}

// ── Report ────────────────────────────────────────────────────────────────────

/// The five step results, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisReport {
    pub sources: Vec<SourceInspection>,
    pub compiles: Vec<CompileAttempt>,
    pub mode: ModeQuery,
    pub deployed: DeployedListing,
    pub remediation: RemediationPlan,
}

// ── Pure functions ────────────────────────────────────────────────────────────

/// The longest prefix of `text` holding at most `chars` characters.
#[must_use]
pub fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The first `lines` lines of `text`, terminators included.
///
/// The result is always a prefix of `text`.
#[must_use]
pub fn first_lines(text: &str, lines: usize) -> &str {
    let end = text
        .split_inclusive('\n')
        .take(lines)
        .map(str::len)
        .sum::<usize>();
    &text[..end]
}

/// Format a byte count with comma thousands separators: `1234567` → `1,234,567`.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
