//! Filesystem utilities for rsetup.
//!
//! The preset document is always rewritten in full, so every write goes
//! through [`atomic_write`] to keep a crash from leaving a truncated file.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
