use crate::error::{ImportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Entries buffered between transactional flushes.
const DEFAULT_BATCH_SIZE: usize = 5000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entries written per transaction.
    pub batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl Config {
    /// Load `importer.toml` from the working directory. The file is
    /// optional; defaults apply when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("importer.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = Config::load_from(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("importer.toml");
        fs::write(&path, "batch_size = 250\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.batch_size, 250);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("importer.toml");
        fs::write(&path, "batch_size = \"many\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
