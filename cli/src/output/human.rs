//! Human-readable terminal renderer.

use std::io::{self, Write};
use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::domain::diagnosis::group_thousands;
use crate::domain::{
    CompileAttempt, CompileOutcome, DeployedListing, DiagnosisReport, DoctorConfig, InspectMode,
    LessVariables, ModeQuery, RemediationPlan, SourceContent, SourceInspection,
};
use crate::output::OutputContext;
use crate::output::styles::Mark;

const RULE: &str = "=================================================================";
const THIN_RULE: &str = "-----------------------------------------------------------------";

/// Renders domain types as human-readable text using `OutputContext` styles.
///
/// Rendering targets any `io::Write` so the same report can go to stdout or
/// into a buffer.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
    preview_chars: usize,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext, preview_chars: usize) -> Self {
        Self { ctx, preview_chars }
    }

    /// Render a complete diagnosis, banner to closing banner.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_diagnosis(&self, report: &DiagnosisReport, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "  {}",
            "CSS Compilation Diagnosis and Fix Script".style(self.ctx.styles.banner)
        )?;
        writeln!(out, "{RULE}")?;

        self.step_header(out, 1, "Examining LESS files")?;
        for (i, source) in report.sources.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.render_source(source, out)?;
        }

        self.step_header(out, 2, "Testing LESS Compilation")?;
        for (i, attempt) in report.compiles.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.render_compile(i + 1, attempt, out)?;
        }

        self.step_header(out, 3, "Checking Magento Configuration")?;
        self.render_mode(&report.mode, out)?;

        self.step_header(out, 4, "Checking Deployed CSS Files")?;
        self.render_deployed(&report.deployed, out)?;

        self.step_header(out, 5, "Proposed Fix")?;
        self.render_remediation(&report.remediation, out)?;

        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "{}", "DIAGNOSIS COMPLETE".style(self.ctx.styles.banner))?;
        writeln!(out, "{RULE}")
    }

    fn step_header(&self, out: &mut impl Write, n: usize, title: &str) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "{}",
            format!("STEP {n}: {title}").style(self.ctx.styles.heading)
        )?;
        writeln!(out, "{RULE}")?;
        writeln!(out)
    }

    fn render_source(&self, source: &SourceInspection, out: &mut impl Write) -> io::Result<()> {
        match source.mode {
            InspectMode::Full => writeln!(out, "Checking {}...", source.name)?,
            InspectMode::Excerpt(n) => {
                writeln!(out, "Checking {} (first {n} lines)...", source.name)?;
            }
        }
        match &source.content {
            SourceContent::Missing => {
                writeln!(out, "{} File NOT found!", self.ctx.styles.mark(Mark::Fail))?;
                writeln!(
                    out,
                    "  {}",
                    source.path.display().style(self.ctx.styles.muted)
                )
            }
            SourceContent::Unreadable(reason) => writeln!(
                out,
                "{} File exists but cannot be read: {reason}",
                self.ctx.styles.mark(Mark::Fail)
            ),
            SourceContent::Text(text) => {
                writeln!(out, "{} File exists", self.ctx.styles.mark(Mark::Pass))?;
                if source.mode == InspectMode::Full {
                    writeln!(out, "Content:")?;
                }
                write_block(out, text)
            }
        }
    }

    fn render_compile(
        &self,
        n: usize,
        attempt: &CompileAttempt,
        out: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(out, "Test {n}: Compiling {}", attempt.label)?;
        writeln!(out, "{THIN_RULE}")?;
        writeln!(
            out,
            "{}",
            format!(
                "Source: {}  Variables: {}",
                attempt.source.display(),
                format_variables(&attempt.variables)
            )
            .style(self.ctx.styles.muted)
        )?;
        match &attempt.outcome {
            CompileOutcome::Success(style) => {
                writeln!(
                    out,
                    "{} SUCCESS! Compiled {} bytes",
                    self.ctx.styles.mark(Mark::Pass),
                    group_thousands(u64::try_from(style.len()).unwrap_or(u64::MAX))
                )?;
                writeln!(out, "First {} characters:", self.preview_chars)?;
                write_block(out, style.preview(self.preview_chars))?;
                writeln!(out, "...")
            }
            CompileOutcome::EmptyOutput => writeln!(
                out,
                "{} WARNING: CSS output is EMPTY despite no errors!",
                self.ctx.styles.mark(Mark::Warn)
            ),
            CompileOutcome::Failure { kind, message } => {
                writeln!(out, "{} ERROR: {message}", self.ctx.styles.mark(Mark::Fail))?;
                writeln!(out, "Error kind: {kind}")
            }
        }
    }

    fn render_mode(&self, mode: &ModeQuery, out: &mut impl Write) -> io::Result<()> {
        match mode {
            ModeQuery::Output(text) => {
                writeln!(out, "Current mode:")?;
                write_block(out, text)
            }
            ModeQuery::Unavailable(reason) => writeln!(
                out,
                "{} Could not run status command: {reason}",
                self.ctx.styles.mark(Mark::Fail)
            ),
        }
    }

    fn render_deployed(&self, listing: &DeployedListing, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            format!("Pattern: {}", listing.pattern).style(self.ctx.styles.muted)
        )?;
        if let Some(error) = &listing.error {
            return writeln!(
                out,
                "{} Cannot resolve pattern: {error}",
                self.ctx.styles.mark(Mark::Fail)
            );
        }
        writeln!(out, "Found {} CSS files:", listing.artifacts.len())?;
        for artifact in &listing.artifacts {
            writeln!(
                out,
                "  - {}: {} bytes",
                artifact.relative_path,
                group_thousands(artifact.size)
            )?;
        }
        Ok(())
    }

    fn render_remediation(&self, plan: &RemediationPlan, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Based on the diagnosis above, here's the recommended fix:")?;
        for (i, option) in plan.options.iter().enumerate() {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                format!("Option {}: {}", i + 1, option.title).style(self.ctx.styles.heading)
            )?;
            writeln!(out, "{THIN_RULE}")?;
            for line in &option.lines {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }

    /// Render the effective configuration and the paths derived from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or writing fails.
    pub fn render_config(
        &self,
        config: &DoctorConfig,
        path: &Path,
        found: bool,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let exists = if found { "" } else { " (not found, defaults)" };
        writeln!(
            out,
            "{}",
            format!("Configuration ({}){exists}", path.display()).style(self.ctx.styles.banner)
        )?;
        writeln!(out)?;
        out.write_all(serde_yaml::to_string(config)?.as_bytes())?;
        writeln!(out)?;
        writeln!(out, "{}", "Derived paths:".style(self.ctx.styles.heading))?;
        writeln!(out, "  {:<18} {}", "theme css:", config.theme_css_dir().display())?;
        writeln!(out, "  {:<18} {}", "static dir:", config.static_dir().display())?;
        writeln!(out, "  {:<18} {}", "deployed pattern:", config.deployed_pattern())?;
        Ok(())
    }
}

/// Write `text` followed by a newline unless it already ends with one.
fn write_block(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

/// `@media-common: true; @media-target: mobile`, or `(none)`.
fn format_variables(variables: &LessVariables) -> String {
    if variables.is_empty() {
        return "(none)".to_string();
    }
    variables
        .iter()
        .map(|(name, value)| format!("@{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
