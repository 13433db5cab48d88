use crate::boundary::BoundaryWarning;
use crate::cli::Invocation;
use crate::commands::Context;
use crate::domain::{Target, Version};
use crate::error::{Result, RoseError};
use crate::project::{read_lines, write_lines};

pub const HELP: &str = "Usage: rose bump <major>.<minor>.<patch>[-prerelease]

Increments the version in the `setup.py`, the Sphinx `conf.py` & package itself.
It will skip any of those files if they can not be found.";

pub fn run(ctx: &mut Context<'_>, invocation: &Invocation) -> Result<()> {
    let raw_version = invocation
        .args
        .first()
        .ok_or_else(|| RoseError::show_help("No version provided!"))?;
    let version = Version::parse(raw_version)?;

    for target in Target::all() {
        replace_version(ctx, target, &version)?;
    }

    ctx.outcome.exit_code = 0;
    Ok(())
}

/// Rewrites every file of one target kind, warning about missing ones
fn replace_version(ctx: &mut Context<'_>, target: Target, version: &Version) -> Result<()> {
    let files = ctx.project.target_files(target)?;

    if files.is_empty() {
        let pattern = ctx.project.config().get_str(target.config_key())?;
        let warning = BoundaryWarning::NoModuleMatch {
            pattern: pattern.to_string(),
        };
        ctx.outcome.out(warning.to_string());
        return Ok(());
    }

    for path in files {
        let Some(lines) = read_lines(&path)? else {
            let warning = BoundaryWarning::MissingTargetFile {
                target,
                path: ctx.project.display_path(&path),
            };
            tracing::debug!(%warning, "skipping target");
            ctx.outcome.out(warning.to_string());
            continue;
        };

        let lines = target.substitute(&lines, version);
        write_lines(&path, &lines)?;
        tracing::info!(path = %path.display(), %target, version = %version, "rewrote version");
    }

    Ok(())
}
