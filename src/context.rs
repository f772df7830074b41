//! Store directory resolution for rsetup.
//!
//! A store is one directory holding the preset document, the lock sentinel
//! and an optional `rsetup.yaml`. Every path the store touches is derived
//! here, so several independent stores can coexist in one process.

use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{Result, RsetupError};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the store directory when `--dir` is not given.
pub const STORE_DIR_ENV: &str = "RSETUP_DIR";

/// Resolved paths and settings for one preset store.
///
/// All paths are absolute.
#[derive(Debug, Clone)]
pub struct StoreContext {
    /// Directory containing the document, the sentinel and the config file.
    pub root: PathBuf,

    /// Path to the preset document (default: `{root}/rsetup.json`).
    pub document_path: PathBuf,

    /// Path to the lock sentinel (default: `{root}/rsetup.mutex`).
    pub lock_path: PathBuf,

    /// Effective configuration.
    pub config: Config,
}

impl StoreContext {
    /// Resolve the store directory and load its configuration.
    ///
    /// Resolution order: `explicit`, then `$RSETUP_DIR`, then the current
    /// working directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = match explicit {
            Some(dir) => dir.to_path_buf(),
            None => match env::var_os(STORE_DIR_ENV) {
                Some(dir) if !dir.is_empty() => PathBuf::from(dir),
                _ => current_dir()?,
            },
        };

        Self::resolve_from(root)
    }

    /// Resolve a store rooted at `root`, reading `rsetup.yaml` if present.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = absolutize(root.as_ref())?;
        let config = Config::load_or_default(root.join(CONFIG_FILE_NAME))?;
        Ok(Self::with_config(root, config))
    }

    /// Build a context from an already loaded configuration.
    pub fn with_config<P: Into<PathBuf>>(root: P, config: Config) -> Self {
        let root = root.into();
        Self {
            document_path: root.join(&config.document_file),
            lock_path: root.join(&config.lock_file),
            root,
            config,
        }
    }

    /// Path to the configuration file of this store.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        RsetupError::InvalidArgument(format!("failed to get current working directory: {}", e))
    })
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(current_dir()?.join(path))
    }
}
