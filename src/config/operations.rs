//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, RsetupError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RsetupError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| RsetupError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RsetupError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `lock_ttl_ms` and `poll_interval_ms` must be positive
    /// - `document_file` and `lock_file` must be plain, non-empty file names
    /// - `document_file` and `lock_file` must differ
    pub fn validate(&self) -> Result<()> {
        if self.lock_ttl_ms == 0 {
            return Err(RsetupError::Config(
                "lock_ttl_ms must be greater than 0".to_string(),
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err(RsetupError::Config(
                "poll_interval_ms must be greater than 0".to_string(),
            ));
        }

        validate_file_name("document_file", &self.document_file)?;
        validate_file_name("lock_file", &self.lock_file)?;

        if self.document_file == self.lock_file {
            return Err(RsetupError::Config(format!(
                "document_file and lock_file must differ (both are '{}')",
                self.document_file
            )));
        }

        Ok(())
    }
}

fn validate_file_name(key: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RsetupError::Config(format!("{} must be non-empty", key)));
    }

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(RsetupError::Config(format!(
            "{} must be a plain file name (found '{}')",
            key, name
        )));
    }

    Ok(())
}
