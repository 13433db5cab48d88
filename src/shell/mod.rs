//! External process execution
//!
//! The [Shell] trait is the only way rose runs other programs (git, python).
//! Commands depend on the trait so tests can swap in [mock::MockShell]:
//!
//! - [system::SystemShell]: runs real processes with `std::process::Command`
//! - [mock::MockShell]: records commands and replays canned results

pub mod mock;
pub mod system;

pub use mock::MockShell;
pub use system::SystemShell;

use crate::error::Result;

/// What a finished external command left behind
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellOutput {
    /// Process exit code (-1 when killed by a signal)
    pub code: i32,
    /// Captured stderr, one entry per line
    pub errors: Vec<String>,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs one external command at a time, blocking until it exits.
pub trait Shell {
    /// Run `command`, split on whitespace into program and arguments.
    ///
    /// # Returns
    /// * `Ok(ShellOutput)` - The process ran; check `code` for success
    /// * `Err` - The process could not be started at all
    fn run(&mut self, command: &str) -> Result<ShellOutput>;
}
