//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a preset store.
///
/// This struct represents the contents of `rsetup.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Storage settings
    // =========================================================================
    /// File name of the preset document within the store directory.
    #[serde(default = "default_document_file")]
    pub document_file: String,

    /// File name of the lock sentinel within the store directory.
    #[serde(default = "default_lock_file")]
    pub lock_file: String,

    /// Indentation (spaces) of the preset document.
    #[serde(default = "default_indent")]
    pub document_indent: usize,

    /// Default indentation (spaces) for `export`.
    #[serde(default = "default_indent")]
    pub export_indent: usize,

    // =========================================================================
    // Lock settings
    // =========================================================================
    /// Milliseconds after which an unreleased sentinel is ignored.
    #[serde(default = "default_lock_ttl_ms")]
    pub lock_ttl_ms: u64,

    /// Milliseconds between sentinel checks while waiting for the lock.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Config {
    pub fn lock_ttl(&self) -> Duration {
        Duration::from_millis(self.lock_ttl_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_file: default_document_file(),
            lock_file: default_lock_file(),
            document_indent: default_indent(),
            export_indent: default_indent(),
            lock_ttl_ms: default_lock_ttl_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
