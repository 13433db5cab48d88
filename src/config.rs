use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RoseError};

/// Name of the config file, both in the home directory and the project root
pub const CONFIG_FILE_NAME: &str = ".rose";

/// Flat key/value configuration backed by JSON files.
///
/// Built once at startup from the defaults, the per-user `~/.rose` and the
/// per-project `.rose`, in that order; later files override earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    values: Map<String, Value>,
}

/// Returns the default patterns that detect version assignment lines.
fn default_search_for() -> Value {
    Value::from(vec!["^__version__ = ", r"version\s?=\s?"])
}

impl Default for Config {
    fn default() -> Self {
        let mut values = Map::new();
        values.insert("search_for".to_string(), default_search_for());
        values.insert("manifest_path".to_string(), Value::from("setup.py"));
        values.insert("sphinx_path".to_string(), Value::from("docs/conf.py"));
        values.insert("module_path".to_string(), Value::from("*/__init__.py"));
        values.insert("python".to_string(), Value::from("python"));
        Config { values }
    }
}

impl Config {
    /// Loads the layered configuration for a project.
    ///
    /// Order:
    /// 1. Built-in defaults
    /// 2. `<home>/.rose`, written out with the current values if it does not exist
    /// 3. `<base_dir>/.rose`, if present
    ///
    /// # Arguments
    /// * `base_dir` - Project root
    /// * `home` - User home directory; `None` skips the per-user file
    pub fn load(base_dir: &Path, home: Option<&Path>) -> Result<Config> {
        let mut config = Config::default();

        if let Some(home) = home {
            let user_path = home.join(CONFIG_FILE_NAME);
            if user_path.exists() {
                config.merge(Self::read_file(&user_path)?);
            } else {
                tracing::debug!(path = %user_path.display(), "creating user config");
                config.save(&user_path)?;
            }
        }

        let project_path = base_dir.join(CONFIG_FILE_NAME);
        if project_path.exists() {
            config.merge(Self::read_file(&project_path)?);
        }

        Ok(config)
    }

    /// Reads one config file; it must hold a JSON object
    pub fn read_file(path: &Path) -> Result<Map<String, Value>> {
        let raw = fs::read_to_string(path)?;
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(values) => Ok(values),
            other => Err(RoseError::config(format!(
                "'{}' must contain a JSON object, found {}",
                path.display(),
                other
            ))),
        }
    }

    pub fn merge(&mut self, values: Map<String, Value>) {
        self.values.extend(values);
    }

    /// Writes the current values as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let rendered = serde_json::to_string_pretty(&self.values)?;
        fs::write(path, rendered)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// String value for `key`, or a config error if missing or not a string
    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| RoseError::config(format!("'{}' must be set to a string", key)))
    }

    /// List of strings for `key`; a single string counts as a one-item list
    pub fn get_str_list(&self, key: &str) -> Result<Vec<String>> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        RoseError::config(format!("'{}' must only contain strings", key))
                    })
                })
                .collect(),
            _ => Err(RoseError::config(format!(
                "'{}' must be set to a list of strings",
                key
            ))),
        }
    }

    /// Path for `key`, resolved against `base_dir`
    pub fn path(&self, key: &str, base_dir: &Path) -> Result<PathBuf> {
        Ok(base_dir.join(self.get_str(key)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_for() {
        let config = Config::default();
        assert_eq!(
            config.get_str_list("search_for").unwrap(),
            vec!["^__version__ = ".to_string(), "version\\s?=\\s?".to_string()]
        );
        assert_eq!(config.get("does_not_exist"), None);
    }

    #[test]
    fn test_set_overrides() {
        let mut config = Config::default();
        config.set("does_not_exist", "does now");
        assert_eq!(config.get_str("does_not_exist").unwrap(), "does now");
    }

    #[test]
    fn test_get_str_wrong_type() {
        let mut config = Config::default();
        config.set("sphinx_path", 3);
        assert!(matches!(
            config.get_str("sphinx_path"),
            Err(RoseError::Config(_))
        ));
    }

    #[test]
    fn test_get_str_list_accepts_single_string() {
        let mut config = Config::default();
        config.set("search_for", "^VERSION");
        assert_eq!(config.get_str_list("search_for").unwrap(), vec!["^VERSION"]);
    }

    #[test]
    fn test_path_resolves_against_base() {
        let config = Config::default();
        let path = config.path("sphinx_path", Path::new("/project")).unwrap();
        assert_eq!(path, PathBuf::from("/project/docs/conf.py"));
    }
}
