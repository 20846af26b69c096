//! git::runner
//!
//! Spawns the git executable and captures what it prints.
//!
//! Every [`Repository`](super::Repository) operation goes through
//! [`run`]. It blocks until the child exits and drains stdout and stderr
//! concurrently (via [`Command::output`]) so a chatty command cannot
//! deadlock on a full pipe.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

/// Captured result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Everything written to stdout, lossily decoded
    pub stdout: String,
    /// Everything written to stderr, lossily decoded
    pub stderr: String,
    /// Exit code; `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    /// True iff the process exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The text callers report: stdout on success, stderr otherwise.
    pub fn text(&self) -> &str {
        if self.success() {
            &self.stdout
        } else {
            &self.stderr
        }
    }

    /// Consume the output, keeping only [`text`](Self::text).
    pub fn into_text(self) -> String {
        if self.success() {
            self.stdout
        } else {
            self.stderr
        }
    }
}

/// Run `<executable> <args...>` inside `work_dir`.
///
/// stdin is closed. `GIT_TERMINAL_PROMPT=0` keeps network commands from
/// waiting on a credential prompt nobody can answer.
///
/// # Errors
///
/// Returns the I/O error if the process could not be spawned (missing
/// working directory, executable removed since validation, ...). A
/// nonzero exit is *not* an error here; callers inspect
/// [`CommandOutput::success`].
#[instrument(level = "debug", skip(executable, work_dir), fields(work_dir = %work_dir.display()))]
pub fn run(executable: &Path, work_dir: &Path, args: &[&str]) -> std::io::Result<CommandOutput> {
    debug!(executable = %executable.display(), "spawning git");

    let output = Command::new(executable)
        .args(args)
        .current_dir(work_dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    let captured = CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code(),
    };

    debug!(
        code = ?captured.code,
        stdout_bytes = captured.stdout.len(),
        stderr_bytes = captured.stderr.len(),
        "git exited"
    );

    Ok(captured)
}
