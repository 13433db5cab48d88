//! The commands rose knows, and what they share.
//!
//! Commands are looked up by name through [`CommandName`]; there is no other
//! way to reach a handler.

use std::fmt;
use std::str::FromStr;

use crate::cli::Invocation;
use crate::error::{Result, RoseError};
use crate::output::Outcome;
use crate::project::Project;
use crate::shell::{Shell, ShellOutput};
use crate::ui::Prompt;

pub mod bump;
pub mod current;
pub mod release;
pub mod setup;
pub mod tag;

/// Every command that can be dispatched by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    Bump,
    Current,
    Release,
    Setup,
    Tag,
}

impl CommandName {
    pub fn all() -> [CommandName; 5] {
        [
            CommandName::Bump,
            CommandName::Current,
            CommandName::Release,
            CommandName::Setup,
            CommandName::Tag,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CommandName::Bump => "bump",
            CommandName::Current => "current",
            CommandName::Release => "release",
            CommandName::Setup => "setup",
            CommandName::Tag => "tag",
        }
    }

    /// Usage text shown by `rose help <command>`
    pub fn help(&self) -> &'static str {
        match self {
            CommandName::Bump => bump::HELP,
            CommandName::Current => current::HELP,
            CommandName::Release => release::HELP,
            CommandName::Setup => setup::HELP,
            CommandName::Tag => tag::HELP,
        }
    }

    pub fn run(&self, ctx: &mut Context<'_>, invocation: &Invocation) -> Result<()> {
        match self {
            CommandName::Bump => bump::run(ctx, invocation),
            CommandName::Current => current::run(ctx, invocation),
            CommandName::Release => release::run(ctx, invocation),
            CommandName::Setup => setup::run(ctx, invocation),
            CommandName::Tag => tag::run(ctx, invocation),
        }
    }
}

impl FromStr for CommandName {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self> {
        CommandName::all()
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| RoseError::CommandNotFound(s.to_string()))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a running command can reach
pub struct Context<'a> {
    pub project: &'a Project,
    pub shell: &'a mut dyn Shell,
    pub prompt: &'a mut dyn Prompt,
    pub outcome: &'a mut Outcome,
}

impl Context<'_> {
    /// Records the result of one external step.
    ///
    /// On failure the captured error lines go to stderr and the exit code
    /// becomes 1; on success the exit code is reset to 0.
    pub fn check_success(&mut self, command: &str, sh: &ShellOutput) -> bool {
        if sh.success() {
            self.outcome.exit_code = 0;
            return true;
        }

        for error in &sh.errors {
            self.outcome.err(error.clone());
        }
        self.outcome
            .err(format!("'{}' exited with code {}", command, sh.code));
        self.outcome.exit_code = 1;
        false
    }

    /// Runs `commands` in order, abandoning the rest after the first failure.
    ///
    /// # Returns
    /// * `Ok(true)` - Every step succeeded
    /// * `Ok(false)` - A step exited non-zero (already reported)
    /// * `Err` - A step could not be started
    pub fn run_steps(&mut self, commands: &[String]) -> Result<bool> {
        for command in commands {
            let sh = self.shell.run(command)?;
            if !self.check_success(command, &sh) {
                tracing::warn!(command = %command, code = sh.code, "step failed, abandoning the rest");
                return Ok(false);
            }
        }
        Ok(true)
    }
}
