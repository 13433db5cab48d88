use std::collections::BTreeMap;

use crate::error::{Result, RoseError};

/// Value given to a flag on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Flag given without a value (`--verbose`)
    Switch,
    /// Flag followed by a value (`--type git-flow`)
    Value(String),
}

/// A command line split into command name, positional arguments and flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    pub flags: BTreeMap<String, FlagValue>,
}

impl Invocation {
    pub fn flag(&self, key: &str) -> Option<&FlagValue> {
        self.flags.get(key)
    }

    /// Value of a flag that must carry one
    ///
    /// # Returns
    /// * `Ok(None)` - Flag not given
    /// * `Ok(Some(value))` - Flag given with a value
    /// * `Err` - Flag given as a bare switch
    pub fn value_of(&self, key: &str) -> Result<Option<&str>> {
        match self.flags.get(key) {
            None => Ok(None),
            Some(FlagValue::Value(v)) => Ok(Some(v)),
            Some(FlagValue::Switch) => Err(RoseError::flag(format!(
                "Flag '{}' needs a value.",
                key
            ))),
        }
    }
}

/// Splits raw arguments (program name already removed) into an [`Invocation`].
///
/// The first token is the command. After that, a token starting with `-` is
/// a flag named by the token minus its leading dashes; it takes the next
/// token as its value unless that one also starts with `-` or is missing.
/// Anything else is positional. A repeated flag keeps its last value.
///
/// # Example
/// ```ignore
/// let inv = parse_args(["hello", "world", "-t", "-n", "whee", "--verbosity"])?;
/// // command "hello", args ["world"], t/verbosity switches, n = "whee"
/// ```
pub fn parse_args<I, S>(cli_args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens = cli_args.into_iter().map(Into::into).peekable();
    let command = tokens.next().ok_or(RoseError::MissingCommand)?;

    let mut args = Vec::new();
    let mut flags = BTreeMap::new();

    while let Some(token) = tokens.next() {
        if !token.starts_with('-') {
            args.push(token);
            continue;
        }

        let key = token.trim_start_matches('-').to_string();
        let value = match tokens.next_if(|next| !next.starts_with('-')) {
            Some(next) => FlagValue::Value(next),
            None => FlagValue::Switch,
        };
        flags.insert(key, value);
    }

    Ok(Invocation {
        command,
        args,
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command() {
        let empty: Vec<String> = Vec::new();
        assert!(matches!(parse_args(empty), Err(RoseError::MissingCommand)));
    }

    #[test]
    fn test_command_only() {
        let inv = parse_args(["hello"]).unwrap();
        assert_eq!(inv.command, "hello");
        assert!(inv.args.is_empty());
        assert!(inv.flags.is_empty());
    }

    #[test]
    fn test_args_and_flags() {
        let inv = parse_args(["hello", "world", "-t", "-n", "whee", "--verbosity"]).unwrap();
        assert_eq!(inv.args, vec!["world"]);
        assert_eq!(inv.flag("t"), Some(&FlagValue::Switch));
        assert_eq!(inv.flag("n"), Some(&FlagValue::Value("whee".to_string())));
        assert_eq!(inv.flag("verbosity"), Some(&FlagValue::Switch));
        assert_eq!(inv.flags.len(), 3);
    }

    #[test]
    fn test_repeated_flag_keeps_last() {
        let inv = parse_args(["tag", "v1", "--type", "git", "--type", "git-flow"]).unwrap();
        assert_eq!(inv.value_of("type").unwrap(), Some("git-flow"));
    }

    #[test]
    fn test_value_of_switch_is_error() {
        let inv = parse_args(["tag", "v1", "--type"]).unwrap();
        assert!(matches!(inv.value_of("type"), Err(RoseError::Flag(_))));
        assert_eq!(inv.value_of("t").unwrap(), None);
    }
}
