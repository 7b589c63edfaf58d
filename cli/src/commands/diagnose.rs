//! `css-doctor diagnose` — the five-step CSS compilation diagnosis.

use std::io::Write;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::{AssetFiles, CommandRunner, StyleCompiler};
use crate::application::services::css_doctor::run_diagnosis;
use crate::domain::DoctorConfig;
use crate::infra::fs::LocalFs;
use crate::infra::lessc::LesscCompiler;
use crate::output::{HumanRenderer, OutputContext, TerminalReporter};

/// Run `css-doctor diagnose` against the real filesystem, `lessc` and shell.
///
/// # Errors
///
/// Returns an error only if the report cannot be written to stdout.
pub async fn run(app: &AppContext) -> Result<()> {
    let compiler = LesscCompiler::new(&app.runner, &app.config.compiler);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&app.output, &app.config, &LocalFs, &compiler, &app.runner, &mut out).await
}

/// Run the diagnosis with injected ports and render it to `out`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub async fn run_with(
    ctx: &OutputContext,
    config: &DoctorConfig,
    files: &impl AssetFiles,
    compiler: &impl StyleCompiler,
    cmd_runner: &impl CommandRunner,
    out: &mut impl Write,
) -> Result<()> {
    let report = {
        let reporter = TerminalReporter::new(ctx);
        run_diagnosis(config, files, compiler, cmd_runner, &reporter).await
    };

    HumanRenderer::new(ctx, config.preview_chars)
        .render_diagnosis(&report, out)
        .context("writing diagnosis report")?;
    out.flush().context("flushing diagnosis report")
}
