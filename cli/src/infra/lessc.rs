//! `lessc` adapter — implements the `StyleCompiler` port by running the
//! LESS command-line compiler through a `CommandRunner`.
//!
//! Compression and source maps stay at lessc's defaults (off). Each variable
//! becomes a `--modify-var=<name>=<value>` argument so it is defined before
//! the source is parsed.

use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::application::ports::{CommandRunner, StyleCompiler};
use crate::domain::config::CompilerConfig;
use crate::domain::{CommandError, CompileOutcome, LessVariables};

/// Kind used when lessc fails without a recognisable `<Kind>Error:` prefix.
pub const GENERIC_FAILURE_KIND: &str = "LessError";

/// A lessc error line, optionally tagged like `[ParseError]` output of older releases.
static ERROR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:\[\w+\]\s*)?(?P<kind>[A-Z][A-Za-z]*Error):\s*(?P<message>.*)$")
        .expect("valid error pattern")
});

/// Production `StyleCompiler` backed by the `lessc` executable.
pub struct LesscCompiler<'a, R: CommandRunner> {
    runner: &'a R,
    program: String,
    timeout: Duration,
}

impl<'a, R: CommandRunner> LesscCompiler<'a, R> {
    #[must_use]
    pub fn new(runner: &'a R, config: &CompilerConfig) -> Self {
        Self {
            runner,
            program: config.program.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl<R: CommandRunner> StyleCompiler for LesscCompiler<'_, R> {
    async fn compile(&self, source: &Path, variables: &LessVariables) -> CompileOutcome {
        let mut args = lessc_args(variables);
        args.push(source.display().to_string());
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let output = match self
            .runner
            .run_with_timeout(&self.program, &args, self.timeout)
            .await
        {
            Ok(output) => output,
            Err(e) => {
                let kind = e
                    .downcast_ref::<CommandError>()
                    .map_or("CommandError", CommandError::kind);
                return CompileOutcome::failure(kind, format!("{e:#}"));
            }
        };

        if output.status.success() {
            CompileOutcome::from_css(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let (kind, message) = parse_failure(&stderr, &output.status.to_string());
            CompileOutcome::Failure { kind, message }
        }
    }
}

/// Leading arguments for a lessc run: colour off, then one `--modify-var` per variable.
#[must_use]
pub fn lessc_args(variables: &LessVariables) -> Vec<String> {
    std::iter::once("--no-color".to_string())
        .chain(
            variables
                .iter()
                .map(|(name, value)| format!("--modify-var={name}={value}")),
        )
        .collect()
}

/// Split lessc's stderr into an error kind and a message.
///
/// lessc reports `ParseError: Unrecognised input in styles-m.less on line 3 …`;
/// the kind is the `…Error` word and the message is everything from there on.
/// Unrecognised output keeps the whole text under [`GENERIC_FAILURE_KIND`].
#[must_use]
pub fn parse_failure(stderr: &str, status: &str) -> (String, String) {
    let text = stderr.trim();
    if text.is_empty() {
        return (
            GENERIC_FAILURE_KIND.to_string(),
            format!("lessc failed ({status}) with no error output"),
        );
    }

    let lines: Vec<&str> = text.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = ERROR_LINE.captures(line.trim()) {
            let mut message = caps["message"].to_string();
            for rest in &lines[i + 1..] {
                message.push('\n');
                message.push_str(rest);
            }
            return (caps["kind"].to_string(), message.trim_end().to_string());
        }
    }
    (GENERIC_FAILURE_KIND.to_string(), text.to_string())
}
