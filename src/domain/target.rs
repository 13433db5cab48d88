//! Line rewriting rules for the files that carry a project's version.
//!
//! Lines keep their own terminators, the way `split_inclusive('\n')` yields
//! them. Every rule returns exactly as many lines as it was given.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::version::{quote, Version};

/// `version=` followed by one value (a whole quoted string, or anything up
/// to the first comma) and the comma closing it
static MANIFEST_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(version\s*=\s*)(?:'(?:\\.|[^'\\])*'|"(?:\\.|[^"\\])*"|[^,]*?),"#)
        .expect("manifest assignment pattern is valid")
});

/// The kinds of file `bump` knows how to rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `setup.py`: `version='...',` keyword assignments
    Manifest,
    /// Sphinx `conf.py`: `version = '...'` and `release = '...'`
    DocConfig,
    /// Package `__init__.py`: `__version__ = (...)`
    SourceModule,
}

impl Target {
    pub fn all() -> [Target; 3] {
        [Target::Manifest, Target::DocConfig, Target::SourceModule]
    }

    /// Configuration key holding this target's location
    pub fn config_key(&self) -> &'static str {
        match self {
            Target::Manifest => "manifest_path",
            Target::DocConfig => "sphinx_path",
            Target::SourceModule => "module_path",
        }
    }

    /// Rewrite `lines` so they carry `version`
    pub fn substitute(&self, lines: &[String], version: &Version) -> Vec<String> {
        match self {
            Target::Manifest => substitute_manifest(lines, version),
            Target::DocConfig => substitute_doc_config(lines, version),
            Target::SourceModule => substitute_source_module(lines, version),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Manifest => write!(f, "manifest"),
            Target::DocConfig => write!(f, "documentation config"),
            Target::SourceModule => write!(f, "source module"),
        }
    }
}

/// Splits a line into its text and its terminator (`\r\n`, `\n` or nothing)
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(text) = line.strip_suffix("\r\n") {
        (text, "\r\n")
    } else if let Some(text) = line.strip_suffix('\n') {
        (text, "\n")
    } else {
        (line, "")
    }
}

pub fn substitute_manifest(lines: &[String], version: &Version) -> Vec<String> {
    let value = quote(&version.full());
    lines
        .iter()
        .map(|line| {
            if !line.contains("version") {
                return line.clone();
            }
            MANIFEST_ASSIGNMENT
                .replace_all(line, |caps: &Captures| format!("{}{},", &caps[1], value))
                .into_owned()
        })
        .collect()
}

pub fn substitute_doc_config(lines: &[String], version: &Version) -> Vec<String> {
    let short = quote(&version.short());
    let full = quote(&version.full());
    lines
        .iter()
        .map(|line| {
            let (text, terminator) = split_terminator(line);
            let text = text.trim_start();
            if text.starts_with("version") {
                format!("version = {}{}", short, terminator)
            } else if text.starts_with("release") {
                format!("release = {}{}", full, terminator)
            } else {
                line.clone()
            }
        })
        .collect()
}

pub fn substitute_source_module(lines: &[String], version: &Version) -> Vec<String> {
    let literal = version.tuple_literal();
    lines
        .iter()
        .map(|line| {
            if line.starts_with("__version__") {
                let (_, terminator) = split_terminator(line);
                format!("__version__ = {}{}", literal, terminator)
            } else {
                line.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split_inclusive('\n').map(str::to_string).collect()
    }

    fn final_version() -> Version {
        Version::new(1, 0, 1).with_release("final")
    }

    #[test]
    fn test_manifest_rewrites_assignment() {
        let input = lines("setup(\n    name='basic',\n    version='0.9.1-beta',\n)\n");
        let out = substitute_manifest(&input, &final_version());
        assert_eq!(out.len(), input.len());
        assert_eq!(out[2], "    version='1.0.1-final',\n");
        assert_eq!(out[1], input[1]);
    }

    #[test]
    fn test_manifest_spaced_assignment() {
        let input = lines("    version = \"0.1\", # keep\n");
        let out = substitute_manifest(&input, &Version::new(0, 2, 0));
        assert_eq!(out[0], "    version = '0.2.0', # keep\n");
    }

    #[test]
    fn test_manifest_ignores_lines_without_comma() {
        let input = lines("version = '0.1'\n");
        let out = substitute_manifest(&input, &Version::new(0, 2, 0));
        assert_eq!(out, input);
    }

    #[test]
    fn test_doc_config_rewrites_both_keys() {
        let input = lines("project = 'basic'\nversion = '0.9.1'\nrelease = '0.9.1-beta'\n");
        let out = substitute_doc_config(&input, &final_version());
        assert_eq!(
            out,
            vec![
                "project = 'basic'\n".to_string(),
                "version = '1.0.1'\n".to_string(),
                "release = '1.0.1-final'\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_doc_config_ignores_leading_whitespace_and_keeps_crlf() {
        let input = vec!["   version = 'x'\r\n".to_string(), "release='y'".to_string()];
        let out = substitute_doc_config(&input, &Version::new(2, 0, 0));
        assert_eq!(out[0], "version = '2.0.0'\r\n");
        assert_eq!(out[1], "release = '2.0.0'");
    }

    #[test]
    fn test_source_module_rewrites_tuple() {
        let input = lines("__author__ = 'x'\n__version__ = (0, 9, 1, 'beta')\n");
        let out = substitute_source_module(&input, &final_version());
        assert_eq!(out[0], input[0]);
        assert_eq!(out[1], "__version__ = (1, 0, 1, 'final')\n");
    }

    #[test]
    fn test_source_module_requires_line_start() {
        let input = lines("    __version__ = (0, 1, 0)\n");
        let out = substitute_source_module(&input, &final_version());
        assert_eq!(out, input);
    }

    #[test]
    fn test_every_rule_is_idempotent() {
        let input = lines(
            "__version__ = (0, 9, 1)\nversion='0.9.1',\nrelease = '0.9.1'\nversion = '0.9'\n",
        );
        let version = final_version();
        for target in Target::all() {
            let once = target.substitute(&input, &version);
            let twice = target.substitute(&once, &version);
            assert_eq!(once, twice, "{} rule is not idempotent", target);
        }
    }

    #[test]
    fn test_rules_are_idempotent_for_awkward_releases() {
        let input = lines("    version='0.1.0',\nversion = '0.1'\nrelease = '0.1.0'\n__version__ = (0, 1, 0)\n");
        for raw in ["1.0.0-a,b", "1.0.0-it's", "1.0.0-back\\slash"] {
            let version = Version::parse(raw).unwrap();
            for target in Target::all() {
                let once = target.substitute(&input, &version);
                let twice = target.substitute(&once, &version);
                assert_eq!(once, twice, "{} rule is not idempotent for {}", target, raw);
            }
        }
    }

    #[test]
    fn test_manifest_quotes_release() {
        let input = lines("    version='0.1.0',\n");
        let version = Version::parse("1.0.0-it's").unwrap();
        assert_eq!(
            substitute_manifest(&input, &version)[0],
            "    version='1.0.0-it\\'s',\n"
        );

        let version = Version::parse("1.0.0-a,b").unwrap();
        assert_eq!(
            substitute_manifest(&input, &version)[0],
            "    version='1.0.0-a,b',\n"
        );
    }

    #[test]
    fn test_doc_config_quotes_release() {
        let input = lines("release = '0.1.0'\n");
        let version = Version::parse("1.0.0-it's").unwrap();
        assert_eq!(
            substitute_doc_config(&input, &version)[0],
            "release = '1.0.0-it\\'s'\n"
        );
    }

    #[test]
    fn test_empty_input() {
        for target in Target::all() {
            assert!(target.substitute(&[], &final_version()).is_empty());
        }
    }
}
