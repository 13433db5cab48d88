use crate::error::Result;
use crate::shell::{Shell, ShellOutput};
use std::collections::HashMap;

/// Mock shell for testing without spawning processes.
///
/// Every command succeeds unless a failure was registered for it.
pub struct MockShell {
    commands: Vec<String>,
    failures: HashMap<String, ShellOutput>,
}

impl MockShell {
    /// Create a mock shell where every command succeeds
    pub fn new() -> Self {
        MockShell {
            commands: Vec::new(),
            failures: HashMap::new(),
        }
    }

    /// Make `command` exit with `code`, printing `errors` on stderr
    pub fn fail_on(&mut self, command: impl Into<String>, code: i32, errors: &[&str]) {
        self.failures.insert(
            command.into(),
            ShellOutput {
                code,
                errors: errors.iter().map(|e| e.to_string()).collect(),
            },
        );
    }

    /// Commands run so far, in order
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl Default for MockShell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell for MockShell {
    fn run(&mut self, command: &str) -> Result<ShellOutput> {
        self.commands.push(command.to_string());
        Ok(self.failures.get(command).cloned().unwrap_or_default())
    }
}
