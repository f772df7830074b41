//! Configuration constants and default value functions.

/// Name of the optional configuration file inside the store directory.
pub const CONFIG_FILE_NAME: &str = "rsetup.yaml";

// Default value functions for serde
pub(crate) fn default_document_file() -> String {
    "rsetup.json".to_string()
}
pub(crate) fn default_lock_file() -> String {
    "rsetup.mutex".to_string()
}
pub(crate) fn default_lock_ttl_ms() -> u64 {
    100
}
pub(crate) fn default_poll_interval_ms() -> u64 {
    10
}
pub(crate) fn default_indent() -> usize {
    4
}
