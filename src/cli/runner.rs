//! Command dispatch
//!
//! Turns raw arguments into a finished [`Outcome`]: parse, resolve the
//! command by name, run it, and fall back to help output when asked to.

use crate::cli::args::{parse_args, Invocation};
use crate::commands::{CommandName, Context};
use crate::error::{Result, RoseError};
use crate::output::Outcome;
use crate::project::Project;
use crate::shell::Shell;
use crate::ui::{self, Prompt};

pub const USAGE: &str = "Usage: rose <command_name> [args] [flags]";

/// Names that request help instead of a command
const HELP_NAMES: [&str; 3] = ["help", "-h", "--help"];

/// Runs rose commands against one project
pub struct Runner<S: Shell, P: Prompt> {
    project: Project,
    shell: S,
    prompt: P,
}

impl<S: Shell, P: Prompt> Runner<S, P> {
    pub fn new(project: Project, shell: S, prompt: P) -> Self {
        Runner {
            project,
            shell,
            prompt,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Help output: general usage, or one command's usage text.
    ///
    /// Always exits 1. An unknown command name is an error.
    pub fn help(&self, command_name: Option<&str>, extra_message: Option<&str>) -> Result<Outcome> {
        let mut outcome = Outcome::new();
        outcome.exit_code = 1;

        match command_name {
            None => outcome.err(USAGE),
            Some(name) => {
                let command: CommandName = name.parse()?;
                outcome.err(command.help());

                if let Some(message) = extra_message {
                    outcome.err("");
                    outcome.err(message);
                }
            }
        }

        Ok(outcome)
    }

    /// Runs an already resolved command, recording its output in `outcome`
    pub fn run_command(
        &mut self,
        command: CommandName,
        invocation: &Invocation,
        outcome: &mut Outcome,
    ) -> Result<()> {
        let mut ctx = Context {
            project: &self.project,
            shell: &mut self.shell,
            prompt: &mut self.prompt,
            outcome,
        };
        command.run(&mut ctx, invocation)
    }

    /// Parses `cli_args` (program name removed) and runs the command they name
    pub fn run<I, T>(&mut self, cli_args: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut outcome = Outcome::new();
        self.run_into(cli_args, &mut outcome)?;
        Ok(outcome)
    }

    /// Like [`Runner::run`], but lines a command recorded before failing
    /// stay in `outcome`.
    pub fn run_into<I, T>(&mut self, cli_args: I, outcome: &mut Outcome) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let invocation = parse_args(cli_args)?;

        if HELP_NAMES.contains(&invocation.command.as_str()) {
            *outcome = self.help(invocation.args.first().map(String::as_str), None)?;
            return Ok(());
        }

        let command: CommandName = invocation.command.parse()?;
        tracing::debug!(%command, args = ?invocation.args, "dispatching");

        match self.run_command(command, &invocation, outcome) {
            Err(RoseError::ShowHelp(message)) => {
                *outcome = self.help(Some(command.name()), Some(&message))?;
                Ok(())
            }
            other => other,
        }
    }

    /// Runs a command, prints its output and returns the process exit code.
    ///
    /// Output gathered before an error is printed ahead of it. Errors turn
    /// into exit code 1.
    pub fn from_cli<I, T>(&mut self, cli_args: I) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut outcome = Outcome::new();
        let result = self.run_into(cli_args, &mut outcome);
        ui::display_outcome(&outcome);

        match result {
            Ok(()) => outcome.exit_code,
            Err(RoseError::MissingCommand) => {
                ui::display_error(&RoseError::MissingCommand.to_string());
                eprintln!("{}", USAGE);
                1
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::output::Stream;
    use crate::shell::MockShell;
    use crate::ui::ScriptedPrompt;

    fn runner() -> Runner<MockShell, ScriptedPrompt> {
        Runner::new(
            Project::new(".", Config::default()),
            MockShell::new(),
            ScriptedPrompt::default(),
        )
    }

    #[test]
    fn test_general_help() {
        let outcome = runner().help(None, None).unwrap();
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.lines(), &[(Stream::Stderr, USAGE.to_string())]);
    }

    #[test]
    fn test_help_flags() {
        for name in HELP_NAMES {
            let outcome = runner().run([name]).unwrap();
            assert_eq!(outcome.exit_code, 1);
            assert_eq!(outcome.stream(Stream::Stderr), vec![USAGE]);
        }
    }

    #[test]
    fn test_command_help() {
        let outcome = runner().run(["help", "bump"]).unwrap();
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(
            outcome.lines(),
            &[(
                Stream::Stderr,
                "Usage: rose bump <major>.<minor>.<patch>[-prerelease]\n\nIncrements the version in the `setup.py`, the Sphinx `conf.py` & package itself.\nIt will skip any of those files if they can not be found.".to_string()
            )]
        );
    }

    #[test]
    fn test_help_for_unknown_command() {
        assert!(matches!(
            runner().run(["help", "not_there"]),
            Err(RoseError::CommandNotFound(_))
        ));
    }

    #[test]
    fn test_missing_and_unknown_commands() {
        let empty: [&str; 0] = [];
        assert!(matches!(runner().run(empty), Err(RoseError::MissingCommand)));
        assert!(matches!(
            runner().run(["not_there", "1.0.0"]),
            Err(RoseError::CommandNotFound(_))
        ));
        assert_eq!(runner().from_cli(["not_there"]), 1);
    }

    #[test]
    fn test_output_before_an_error_is_kept() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("setup.py"), "setup(\n    version='0.1.0',\n)\n").unwrap();
        let mut config = Config::default();
        config.set("module_path", "[*/__init__.py");
        let mut runner = Runner::new(
            Project::new(dir.path(), config),
            MockShell::new(),
            ScriptedPrompt::default(),
        );

        let mut outcome = Outcome::new();
        let result = runner.run_into(["bump", "1.0.0"], &mut outcome);

        assert!(matches!(result, Err(RoseError::Pattern(_))));
        assert_eq!(
            outcome.stream(Stream::Stdout),
            vec!["Couldn't find a documentation config at the expected 'docs/conf.py' path."]
        );
        assert!(std::fs::read_to_string(dir.path().join("setup.py"))
            .unwrap()
            .contains("version='1.0.0',"));
    }

    #[test]
    fn test_show_help_adds_message() {
        let outcome = runner().run(["tag"]).unwrap();
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(
            outcome.stream(Stream::Stderr),
            vec![CommandName::Tag.help(), "", "No tag name provided!"]
        );
    }
}
