//! User-facing reports.
//!
//! A caller never sees a raw failure: every store result is turned into a
//! [`Report`], a status plus one short message, at the call boundary.

use crate::error::RsetupError;
use crate::exit_codes;
use crate::store::ImportSummary;
use std::fmt;
use std::path::Path;

/// Severity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Info,
    Error,
}

/// A status plus a short human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub message: String,
    exit_code: i32,
}

impl Report {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            status: Status::Info,
            message: message.into(),
            exit_code: exit_codes::SUCCESS,
        }
    }

    pub fn from_error(err: &RsetupError) -> Self {
        Self {
            status: Status::Error,
            message: err.to_string(),
            exit_code: err.exit_code(),
        }
    }

    pub fn added(name: &str) -> Self {
        Self::info(format!("Setup \"{}\" successfully added.", name))
    }

    pub fn deleted(name: &str) -> Self {
        Self::info(format!("Setup \"{}\" successfully deleted.", name))
    }

    pub fn applied(name: &str) -> Self {
        Self::info(format!("Setup \"{}\" successfully applied.", name))
    }

    pub fn exported(count: usize, path: &Path) -> Self {
        Self::info(format!("Exported {} setups to {}.", count, path.display()))
    }

    pub fn imported(summary: &ImportSummary) -> Self {
        let mut message = format!("Imported {} setups.", summary.added.len());
        if !summary.skipped.is_empty() {
            message.push_str(&format!(
                " Kept existing: {}.",
                summary.skipped.join(", ")
            ));
        }
        Self::info(message)
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Info => f.write_str(&self.message),
            Status::Error => write!(f, "Error: {}", self.message),
        }
    }
}
