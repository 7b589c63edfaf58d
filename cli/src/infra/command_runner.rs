//! Infrastructure implementation of the `CommandRunner` port.

use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::application::ports::CommandRunner;
use crate::domain::CommandError;

/// Production `CommandRunner` on tokio processes.
///
/// The deadline is enforced with `tokio::select!` and an explicit
/// `child.kill()`: dropping an `output()` future alone does not stop the OS
/// process on every platform.
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    async fn execute(mut command: Command, program: &str, timeout: Duration) -> Result<Output> {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|e| CommandError::Spawn {
            program: program.to_string(),
            reason: e.to_string(),
        })?;
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let finished = async {
            let (status, stdout, stderr) =
                tokio::join!(child.wait(), drain(stdout), drain(stderr));
            let status = status.with_context(|| format!("waiting for {program}"))?;
            tracing::debug!(program, %status, "command finished");
            Ok::<Output, anyhow::Error>(Output {
                status,
                stdout,
                stderr,
            })
        };

        tokio::select! {
            result = finished => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                tracing::warn!(program, secs = timeout.as_secs(), "command timed out, killed");
                Err(CommandError::Timeout {
                    program: program.to_string(),
                    secs: timeout.as_secs(),
                }
                .into())
            }
        }
    }
}

/// Read a captured stream to the end. Read errors truncate the capture.
async fn drain(stream: Option<impl AsyncRead + Unpin>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        if let Err(e) = stream.read_to_end(&mut buf).await {
            tracing::debug!(error = %e, "stopped reading child output");
        }
    }
    buf
}

impl CommandRunner for TokioCommandRunner {
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        tracing::debug!(program, ?args, "spawning command");
        let mut command = Command::new(program);
        command.args(args);
        Self::execute(command, program, timeout).await
    }

    async fn run_in_dir(
        &self,
        dir: &Path,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        tracing::debug!(program, ?args, dir = %dir.display(), "spawning command");
        let mut command = Command::new(program);
        command.args(args).current_dir(dir);
        Self::execute(command, program, timeout).await
    }
}
