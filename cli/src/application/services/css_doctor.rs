//! Application service — storefront CSS diagnosis use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::Path;
use std::time::Duration;

use crate::application::ports::{AssetFiles, CommandRunner, ProgressReporter, StyleCompiler};
use crate::domain::diagnosis::first_lines;
use crate::domain::{
    CompileAttempt, DeployedArtifact, DeployedListing, DiagnosisReport, DoctorConfig,
    InspectMode, ModeQuery, SourceContent, SourceInspection, VariantConfig, remediation_plan,
};

/// Run the five diagnosis steps in order and collect their results.
///
/// No step looks at another step's result and no step can abort the run:
/// missing files, compiler errors and command failures all end up in the
/// returned report.
pub async fn run_diagnosis(
    config: &DoctorConfig,
    files: &impl AssetFiles,
    compiler: &impl StyleCompiler,
    cmd_runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
) -> DiagnosisReport {
    reporter.step("examining LESS sources...");
    let sources = vec![
        inspect_source(files, config, &config.sources.full, InspectMode::Full),
        inspect_source(
            files,
            config,
            &config.sources.excerpt,
            InspectMode::Excerpt(config.excerpt_lines),
        ),
    ];

    let mut compiles = Vec::with_capacity(config.variants.len());
    for variant in &config.variants {
        reporter.step(&format!("compiling {}...", variant.source.display()));
        compiles.push(attempt_compile(compiler, config, variant).await);
    }

    reporter.step("querying application mode...");
    let mode = query_application_mode(cmd_runner, config).await;

    reporter.step("listing deployed CSS files...");
    let deployed = list_deployed_artifacts(files, &config.deployed_pattern(), &config.static_dir());

    reporter.success("diagnosis complete");

    DiagnosisReport {
        sources,
        compiles,
        mode,
        deployed,
        remediation: remediation_plan(config),
    }
}

/// Read one source stylesheet relative to the theme's `web/css` directory.
///
/// Absence is a normal outcome, reported as [`SourceContent::Missing`].
pub fn inspect_source(
    files: &impl AssetFiles,
    config: &DoctorConfig,
    relative: &Path,
    mode: InspectMode,
) -> SourceInspection {
    let path = config.theme_file(relative);
    let content = match files.read_to_string(&path) {
        Ok(None) => SourceContent::Missing,
        Ok(Some(text)) => match mode {
            InspectMode::Full => SourceContent::Text(text),
            InspectMode::Excerpt(lines) => SourceContent::Text(first_lines(&text, lines).to_owned()),
        },
        Err(e) => SourceContent::Unreadable(format!("{e:#}")),
    };
    SourceInspection {
        name: relative.display().to_string(),
        path,
        mode,
        content,
    }
}

/// Compile one variant. Compiler failures are part of the returned attempt.
pub async fn attempt_compile(
    compiler: &impl StyleCompiler,
    config: &DoctorConfig,
    variant: &VariantConfig,
) -> CompileAttempt {
    let source = config.theme_file(&variant.source);
    let outcome = compiler.compile(&source, &variant.variables).await;
    CompileAttempt {
        label: variant.label.clone(),
        source,
        variables: variant.variables.clone(),
        outcome,
    }
}

/// Run the configured status command from the storefront root.
///
/// The combined output is returned verbatim. A non-zero exit status is not
/// interpreted; only a command that never ran is [`ModeQuery::Unavailable`].
pub async fn query_application_mode(
    cmd_runner: &impl CommandRunner,
    config: &DoctorConfig,
) -> ModeQuery {
    let status = &config.status_command;
    let args: Vec<&str> = status.args.iter().map(String::as_str).collect();
    let timeout = Duration::from_secs(status.timeout_secs);

    match cmd_runner
        .run_in_dir(&config.root, &status.program, &args, timeout)
        .await
    {
        Ok(output) => {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            ModeQuery::Output(text)
        }
        Err(e) => ModeQuery::Unavailable(format!("{e:#}")),
    }
}

/// Resolve `pattern` and describe each match relative to `base`.
pub fn list_deployed_artifacts(
    files: &impl AssetFiles,
    pattern: &str,
    base: &Path,
) -> DeployedListing {
    match files.glob_files(pattern) {
        Ok(entries) => DeployedListing {
            pattern: pattern.to_string(),
            artifacts: entries
                .iter()
                .map(|entry| DeployedArtifact::from_entry(entry, base))
                .collect(),
            error: None,
        },
        Err(e) => DeployedListing {
            pattern: pattern.to_string(),
            artifacts: Vec::new(),
            error: Some(format!("{e:#}")),
        },
    }
}
