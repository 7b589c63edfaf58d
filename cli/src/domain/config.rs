//! Domain types and validators for css-doctor configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_ROOT: &str = "/home/deptrujillob2c/public_html";
pub const DEFAULT_SITE_URL: &str = "https://www.depositotrujillo.co";
pub const DEFAULT_EXCERPT_LINES: usize = 40;
pub const DEFAULT_PREVIEW_CHARS: usize = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.css-doctor/config.yaml`.
///
/// Every field has a default, so an empty file (or no file) describes the
/// storefront the tool was first written for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Storefront installation root.
    pub root: PathBuf,
    /// Theme whose stylesheets are diagnosed.
    pub theme: ThemeConfig,
    /// Public storefront URL, used in the remediation text.
    pub site_url: String,
    /// Source files inspected in step 1.
    pub sources: SourcesConfig,
    /// Number of lines shown for the excerpt source.
    pub excerpt_lines: usize,
    /// Number of characters shown from a successful compilation.
    pub preview_chars: usize,
    /// LESS compiler invocation.
    pub compiler: CompilerConfig,
    /// Application status query.
    pub status_command: StatusCommandConfig,
    /// Stylesheet variants compiled in step 2, in order.
    pub variants: Vec<VariantConfig>,
}

/// Theme identity: `<vendor>/<name>` deployed for `<locale>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub vendor: String,
    pub name: String,
    pub locale: String,
}

/// Source stylesheets, relative to the theme's `web/css` directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Printed in full.
    pub full: PathBuf,
    /// Printed as its first `excerpt_lines` lines.
    pub excerpt: PathBuf,
}

/// How the LESS compiler is run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Compiler executable (`lessc` compatible command line).
    pub program: String,
    /// Seconds before a compilation is killed.
    pub timeout_secs: u64,
}

/// The command whose output reports the application's deploy mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCommandConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Seconds before the command is killed.
    pub timeout_secs: u64,
}

/// One compilation test: a source stylesheet and the variables defined before parsing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantConfig {
    /// Heading shown for the test, e.g. `styles-m.less with @media-common = true`.
    pub label: String,
    /// Source file relative to the theme's `web/css` directory.
    pub source: PathBuf,
    /// LESS variables, without the leading `@`.
    #[serde(default)]
    pub variables: LessVariables,
}

/// Named LESS variables, ordered by name so invocations are reproducible.
pub type LessVariables = BTreeMap<String, VariableValue>;

/// A LESS variable value as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum VariableValue {
    Bool(bool),
    Integer(i64),
    Text(String),
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            theme: ThemeConfig::default(),
            site_url: DEFAULT_SITE_URL.to_string(),
            sources: SourcesConfig::default(),
            excerpt_lines: DEFAULT_EXCERPT_LINES,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            compiler: CompilerConfig::default(),
            status_command: StatusCommandConfig::default(),
            variants: default_variants(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            vendor: "Olegnax".to_string(),
            name: "athlete2".to_string(),
            locale: "en_US".to_string(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            full: PathBuf::from("styles-m.less"),
            excerpt: PathBuf::from("source/_reset.less"),
        }
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: "lessc".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for StatusCommandConfig {
    fn default() -> Self {
        Self {
            program: "/usr/local/bin/php".to_string(),
            args: vec!["bin/magento".to_string(), "deploy:mode:show".to_string()],
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_variants() -> Vec<VariantConfig> {
    vec![
        VariantConfig {
            label: "styles-m.less with @media-common = true".to_string(),
            source: PathBuf::from("styles-m.less"),
            variables: BTreeMap::from([
                ("media-common".to_string(), VariableValue::Bool(true)),
                (
                    "media-target".to_string(),
                    VariableValue::Text("mobile".to_string()),
                ),
            ]),
        },
        VariantConfig {
            label: "styles-l.less (comparison)".to_string(),
            source: PathBuf::from("styles-l.less"),
            variables: BTreeMap::from([
                ("media-common".to_string(), VariableValue::Bool(false)),
                (
                    "media-target".to_string(),
                    VariableValue::Text("desktop".to_string()),
                ),
            ]),
        },
    ]
}

// ── Derived paths ────────────────────────────────────────────────────────────

impl DoctorConfig {
    /// `<root>/app/design/frontend/<vendor>/<name>/web/css`
    #[must_use]
    pub fn theme_css_dir(&self) -> PathBuf {
        self.root
            .join("app/design/frontend")
            .join(&self.theme.vendor)
            .join(&self.theme.name)
            .join("web/css")
    }

    /// Resolve a path relative to the theme's `web/css` directory.
    #[must_use]
    pub fn theme_file(&self, relative: &Path) -> PathBuf {
        self.theme_css_dir().join(relative)
    }

    /// `<root>/pub/static`, the prefix stripped from deployed artifact paths.
    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        self.root.join("pub/static")
    }

    /// Wildcard pattern matching every deployed `styles-*.css` of the theme.
    ///
    /// Configured segments are escaped, so only the area and file name act
    /// as wildcards.
    #[must_use]
    pub fn deployed_pattern(&self) -> String {
        format!(
            "{}/frontend/{}/{}/*/{}/css/styles-*.css",
            glob::Pattern::escape(&self.static_dir().display().to_string()),
            glob::Pattern::escape(&self.theme.vendor),
            glob::Pattern::escape(&self.theme.name),
            glob::Pattern::escape(&self.theme.locale)
        )
    }

    /// Check the values that would make a run meaningless.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.is_absolute() {
            return Err(ConfigError::RelativeRoot(self.root.display().to_string()));
        }
        for (field, value) in [
            ("theme.vendor", &self.theme.vendor),
            ("theme.name", &self.theme.name),
            ("theme.locale", &self.theme.locale),
        ] {
            if value.trim().is_empty() || value.contains('/') {
                return Err(ConfigError::InvalidThemeSegment {
                    field,
                    value: value.clone(),
                });
            }
        }
        if self.compiler.program.trim().is_empty() {
            return Err(ConfigError::EmptyCompiler);
        }
        if self.status_command.program.trim().is_empty() {
            return Err(ConfigError::EmptyStatusCommand);
        }
        if self.excerpt_lines == 0 {
            return Err(ConfigError::ZeroLimit("excerpt_lines"));
        }
        if self.preview_chars == 0 {
            return Err(ConfigError::ZeroLimit("preview_chars"));
        }
        if self.compiler.timeout_secs == 0 {
            return Err(ConfigError::ZeroLimit("compiler.timeout_secs"));
        }
        if self.status_command.timeout_secs == 0 {
            return Err(ConfigError::ZeroLimit("status_command.timeout_secs"));
        }
        if let Some(variant) = self
            .variants
            .iter()
            .find(|v| v.source.as_os_str().is_empty())
        {
            return Err(ConfigError::EmptyVariantSource(variant.label.clone()));
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
