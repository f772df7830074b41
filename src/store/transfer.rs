//! Export and import of whole documents.

use super::{ImportSummary, PresetDocument, PresetStore};
use crate::error::{Result, RsetupError};
use crate::fs::atomic_write_file;
use log::info;
use std::fs;
use std::path::Path;

impl PresetStore {
    /// Write the entire document to `path` with `indent` spaces per level.
    ///
    /// Returns the number of exported presets.
    pub fn export_to<P: AsRef<Path>>(&self, path: P, indent: usize) -> Result<usize> {
        let path = path.as_ref();
        let doc = self.load()?;

        let json = doc
            .to_json(indent)
            .map_err(|e| RsetupError::io("failed to serialize", path, e.into()))?;
        atomic_write_file(path, &json)?;

        info!("exported {} setups to '{}'", doc.len(), path.display());
        Ok(doc.len())
    }

    /// Merge the presets stored in `path` into this store.
    ///
    /// Names not present locally are appended; names that already exist are
    /// left exactly as they are and listed in [`ImportSummary::skipped`].
    pub fn import_from<P: AsRef<Path>>(&self, path: P) -> Result<ImportSummary> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| RsetupError::io("failed to read", path, e))?;
        let incoming = PresetDocument::parse(&content, path)?;

        let summary = self.lock.with_lock(|| {
            let mut doc = self.read_document()?;
            let summary = doc.merge_missing(incoming);
            if !summary.added.is_empty() {
                self.write_document(&doc)?;
            }
            Ok(summary)
        })?;

        info!(
            "imported '{}': {} added, {} already present",
            path.display(),
            summary.added.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }
}
