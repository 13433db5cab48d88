use regex::Regex;

use crate::boundary::BoundaryWarning;
use crate::cli::Invocation;
use crate::commands::Context;
use crate::domain::Target;
use crate::error::{Result, RoseError};
use crate::project::read_lines;

pub const HELP: &str = "Usage: rose current

Shows the lines in the `setup.py` & the package that set a version.
Lines are matched against the `search_for` patterns from the config.";

pub fn run(ctx: &mut Context<'_>, _invocation: &Invocation) -> Result<()> {
    let project = ctx.project;
    let patterns = compile(&project.config().get_str_list("search_for")?)?;

    for target in [Target::Manifest, Target::SourceModule] {
        let files = project.target_files(target)?;
        if files.is_empty() {
            let pattern = project.config().get_str(target.config_key())?;
            ctx.outcome.out(
                BoundaryWarning::NoModuleMatch {
                    pattern: pattern.to_string(),
                }
                .to_string(),
            );
        }

        for path in files {
            let display = project.display_path(&path);
            let Some(lines) = read_lines(&path)? else {
                ctx.outcome.out(
                    BoundaryWarning::MissingTargetFile {
                        target,
                        path: display,
                    }
                    .to_string(),
                );
                continue;
            };

            for line in matching_lines(&lines, &patterns) {
                ctx.outcome.out(format!("{}: {}", display, line));
            }
        }
    }

    ctx.outcome.exit_code = 0;
    Ok(())
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(|e| RoseError::pattern(format!("'{}': {}", p, e))))
        .collect()
}

/// Lines matching any pattern, without their terminators
fn matching_lines<'a>(lines: &'a [String], patterns: &[Regex]) -> Vec<&'a str> {
    lines
        .iter()
        .map(|line| line.trim_end_matches(['\r', '\n']))
        .filter(|line| patterns.iter().any(|re| re.is_match(line)))
        .collect()
}
