use crate::error::{Result, RoseError};
use std::fmt;
use std::str::FromStr;

/// How a release gets tagged in version control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagType {
    /// A plain `git tag`
    #[default]
    Git,
    /// Release branch merged into master, master merged back into develop
    GitFlow,
}

impl TagType {
    /// Shell commands that tag `tag_name`, in the order they must run
    pub fn commands(&self, tag_name: &str) -> Vec<String> {
        match self {
            TagType::Git => vec![format!("git tag {}", tag_name)],
            TagType::GitFlow => {
                let release_branch = format!("release-{}", tag_name);
                vec![
                    format!("git checkout -b {}", release_branch),
                    "git checkout master".to_string(),
                    format!("git merge {}", release_branch),
                    "git checkout develop".to_string(),
                    "git merge master".to_string(),
                ]
            }
        }
    }
}

impl FromStr for TagType {
    type Err = RoseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.replace('-', "_").as_str() {
            "git" => Ok(TagType::Git),
            "git_flow" => Ok(TagType::GitFlow),
            _ => Err(RoseError::flag(format!("Unknown tag type option '{}'.", s))),
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagType::Git => write!(f, "git"),
            TagType::GitFlow => write!(f, "git-flow"),
        }
    }
}
