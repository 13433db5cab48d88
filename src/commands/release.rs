use crate::cli::Invocation;
use crate::commands::Context;
use crate::error::Result;

pub const HELP: &str = "Usage: rose release

Pushes the release to PyPI.";

/// Steps that build and upload a source distribution
pub fn release_commands(python: &str) -> Vec<String> {
    vec![
        format!("{} setup.py sdist", python),
        format!("{} setup.py sdist upload", python),
    ]
}

pub fn run(ctx: &mut Context<'_>, _invocation: &Invocation) -> Result<()> {
    let python = ctx.project.config().get_str("python")?;
    let commands = release_commands(python);
    ctx.run_steps(&commands)?;
    Ok(())
}
