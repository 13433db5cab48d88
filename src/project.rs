use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::Target;
use crate::error::{Result, RoseError};

/// The project rose works on: its root directory and the configuration
/// loaded for it. Built once at startup and handed to every command.
#[derive(Debug, Clone)]
pub struct Project {
    base_dir: PathBuf,
    config: Config,
}

impl Project {
    pub fn new(base_dir: impl Into<PathBuf>, config: Config) -> Self {
        Project {
            base_dir: base_dir.into(),
            config,
        }
    }

    /// Loads the layered configuration for `base_dir` (see [`Config::load`])
    pub fn load(base_dir: impl Into<PathBuf>, home: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir.into();
        let config = Config::load(&base_dir, home)?;
        Ok(Project { base_dir, config })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// `path` relative to the project root, for messages
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.base_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Files the configuration points at for `target`.
    ///
    /// Manifest and doc config name a single file, which may not exist.
    /// The source module setting is a glob; only existing matches come back,
    /// sorted, and the list may be empty.
    pub fn target_files(&self, target: Target) -> Result<Vec<PathBuf>> {
        let setting = self.config.get_str(target.config_key())?;
        match target {
            Target::Manifest | Target::DocConfig => Ok(vec![self.base_dir.join(setting)]),
            Target::SourceModule => self.glob(setting),
        }
    }

    /// Expands `pattern` relative to the project root
    pub fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let base = glob::Pattern::escape(&self.base_dir.to_string_lossy());
        let full = Path::new(&base).join(pattern);

        let mut matches = Vec::new();
        for entry in glob::glob(&full.to_string_lossy())
            .map_err(|e| RoseError::pattern(format!("'{}': {}", pattern, e)))?
        {
            let path = entry.map_err(|e| RoseError::pattern(e.to_string()))?;
            if path.is_file() {
                matches.push(path);
            }
        }
        matches.sort();
        Ok(matches)
    }
}

/// Reads a file as lines that keep their terminators.
///
/// # Returns
/// * `Ok(Some(lines))` - File contents
/// * `Ok(None)` - The file does not exist
/// * `Err` - The file exists but could not be read
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    Ok(Some(raw.split_inclusive('\n').map(str::to_string).collect()))
}

pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    fs::write(path, lines.concat())?;
    Ok(())
}
