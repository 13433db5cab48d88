use crate::error::{Result, RoseError};
use crate::shell::{Shell, ShellOutput};
use std::path::PathBuf;
use std::process::Command;

/// Runs commands as real child processes inside the project directory
pub struct SystemShell {
    working_dir: PathBuf,
}

impl SystemShell {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        SystemShell {
            working_dir: working_dir.into(),
        }
    }
}

impl Shell for SystemShell {
    fn run(&mut self, command: &str) -> Result<ShellOutput> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| RoseError::external(command, "empty command"))?;

        tracing::debug!(command, dir = %self.working_dir.display(), "running external command");

        let output = Command::new(program)
            .args(parts)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| RoseError::external(command, e.to_string()))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let shell_output = ShellOutput {
            code: output.status.code().unwrap_or(-1),
            errors: stderr.lines().map(str::to_string).collect(),
        };

        tracing::debug!(command, code = shell_output.code, "external command finished");
        Ok(shell_output)
    }
}
