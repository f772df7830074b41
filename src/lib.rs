//! rsetup: named render-setup presets shared between processes.
//!
//! Presets live in one JSON document per store directory. Every access to
//! the document goes through a cooperative sentinel-file lock that expires
//! on its own, so a crashed process can never lock the store for good.

pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fields;
pub mod fs;
pub mod locks;
pub mod report;
pub mod store;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::StoreContext;
pub use error::{Result, RsetupError};
pub use fields::FieldGroup;
pub use report::{Report, Status};
pub use store::{ImportSummary, Preset, PresetDocument, PresetStore};
pub use tree::{JsonTree, SettingsTree};
