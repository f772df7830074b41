//! Exit code constants for the rsetup CLI.
//!
//! - 0: Success
//! - 1: User error (empty/duplicate/unknown preset name, bad arguments)
//! - 2: Document failure (corrupt JSON, read/write failure)
//! - 3: Attribute path did not resolve against the settings tree
//! - 4: Configuration file unreadable or invalid

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: blank name, duplicate name, unknown name, or invalid argument.
pub const USER_ERROR: i32 = 1;

/// Document failure: the store or an import file is corrupt or cannot be read/written.
pub const DOCUMENT_FAILURE: i32 = 2;

/// A dotted attribute path did not resolve.
pub const PATH_FAILURE: i32 = 3;

/// Configuration could not be loaded or failed validation.
pub const CONFIG_FAILURE: i32 = 4;
