use crate::cli::Invocation;
use crate::commands::Context;
use crate::domain::TagType;
use crate::error::{Result, RoseError};

pub const HELP: &str = "Usage: rose tag <tag_name>

Tags the version within your version control system.

Flags:
  -t, --type
      Specifies the VCS (& type of tagging). Valid options are 'git' or 'git-flow'.";

pub fn run(ctx: &mut Context<'_>, invocation: &Invocation) -> Result<()> {
    let tag_name = match invocation.args.as_slice() {
        [name] => name,
        _ => return Err(RoseError::show_help("No tag name provided!")),
    };
    let tag_type = tag_type(invocation)?;

    tracing::info!(tag = %tag_name, %tag_type, "tagging");
    ctx.run_steps(&tag_type.commands(tag_name))?;
    Ok(())
}

/// `--type` wins over `-t`; neither means plain git
fn tag_type(invocation: &Invocation) -> Result<TagType> {
    let raw = match invocation.value_of("type")? {
        Some(raw) => Some(raw),
        None => invocation.value_of("t")?,
    };
    raw.map_or(Ok(TagType::default()), str::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_args;

    #[test]
    fn test_tag_type_defaults_to_git() {
        let inv = parse_args(["tag", "v1.0.0"]).unwrap();
        assert_eq!(tag_type(&inv).unwrap(), TagType::Git);
    }

    #[test]
    fn test_long_flag_wins() {
        let inv = parse_args(["tag", "v1.0.0", "-t", "git", "--type", "git-flow"]).unwrap();
        assert_eq!(tag_type(&inv).unwrap(), TagType::GitFlow);
    }

    #[test]
    fn test_short_flag() {
        let inv = parse_args(["tag", "v1.0.0", "-t", "git_flow"]).unwrap();
        assert_eq!(tag_type(&inv).unwrap(), TagType::GitFlow);
    }

    #[test]
    fn test_unknown_type() {
        let inv = parse_args(["tag", "v1.0.0", "--type", "hg"]).unwrap();
        assert!(matches!(tag_type(&inv), Err(RoseError::Flag(_))));
    }
}
