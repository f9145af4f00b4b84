use crate::artifacts::process::tool::{ShellCommand, Tool};
use anyhow::Context;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// A child process finished with a non-zero status.
///
/// The code is carried so the binary can exit with it unchanged.
#[derive(Debug, thiserror::Error)]
#[error("{tool} exited with status {code}")]
pub struct ToolFailed {
    pub tool: Tool,
    pub code: i32,
}

impl ShellCommand {
    /// Run attached to the current terminal and return the exit code.
    pub fn run(&self, shell: &str) -> anyhow::Result<i32> {
        debug!(shell, line = self.line(), "running");

        let status = Command::new(shell)
            .arg("-c")
            .arg(self.line())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("failed to start {}", self.tool()))?;

        Ok(exit_code(status))
    }

    /// Run with stdout captured; stderr still goes to the terminal.
    pub fn output(&self, shell: &str) -> anyhow::Result<Vec<u8>> {
        debug!(shell, line = self.line(), "capturing output");

        let output = Command::new(shell)
            .arg("-c")
            .arg(self.line())
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("failed to start {}", self.tool()))?;

        match exit_code(output.status) {
            0 => Ok(output.stdout),
            code => Err(ToolFailed {
                tool: self.tool(),
                code,
            }
            .into()),
        }
    }
}

/// Exit code of a finished child; signals map to `128 + signal` on Unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    panic!("child process finished without an exit status: {status:?}")
}
