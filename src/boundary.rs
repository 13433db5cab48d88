use std::fmt;

use crate::domain::Target;

/// Non-fatal conditions hit while rewriting target files.
/// They are reported to the user and the command carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A target file is not where the configuration says it is
    MissingTargetFile { target: Target, path: String },
    /// The module glob matched no files
    NoModuleMatch { pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingTargetFile { target, path } => {
                write!(f, "Couldn't find a {} at the expected '{}' path.", target, path)
            }
            BoundaryWarning::NoModuleMatch { pattern } => {
                write!(f, "Couldn't find a source module matching '{}'.", pattern)
            }
        }
    }
}
