//! The preset store.
//!
//! A [`PresetStore`] owns one document file and the sentinel lock guarding
//! it. Every public operation re-reads the document from disk, and every
//! mutation performs its whole read-modify-write cycle under a single lock
//! acquisition, so two processes never interleave inside one operation
//! while both respect the lock.
//!
//! # Example
//!
//! ```no_run
//! use rsetup::store::PresetStore;
//! use rsetup::tree::JsonTree;
//! use serde_json::json;
//!
//! let store = PresetStore::at("/tmp/presets")?;
//! let scene = JsonTree::new("Scene", json!({"render": {"engine": "CYCLES"}}))?;
//! store.create("studio", &["render.engine"], &scene)?;
//! assert_eq!(store.list_names()?, ["studio"]);
//! # Ok::<(), rsetup::error::RsetupError>(())
//! ```

mod document;
mod transfer;


pub use document::{ImportSummary, Preset, PresetDocument, render_json, render_json_with};

use crate::context::StoreContext;
use crate::error::{Result, RsetupError};
use crate::fields::{FieldGroup, collect_paths};
use crate::fs::atomic_write_file;
use crate::locks::SentinelLock;
use crate::tree::SettingsTree;
use log::{debug, info};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Named presets persisted in one JSON document.
#[derive(Debug, Clone)]
pub struct PresetStore {
    ctx: StoreContext,
    lock: SentinelLock,
}

impl PresetStore {
    /// Open the store described by `ctx`. No file is touched.
    pub fn open(ctx: StoreContext) -> Self {
        let lock = SentinelLock::for_store(&ctx);
        Self { ctx, lock }
    }

    /// Open the store in `root`, reading its `rsetup.yaml` if present.
    pub fn at<P: AsRef<Path>>(root: P) -> Result<Self> {
        Ok(Self::open(StoreContext::resolve_from(root)?))
    }

    pub fn context(&self) -> &StoreContext {
        &self.ctx
    }

    pub fn sentinel(&self) -> &SentinelLock {
        &self.lock
    }

    pub fn document_path(&self) -> &Path {
        &self.ctx.document_path
    }

    /// Create an empty document if none exists yet.
    ///
    /// Returns `true` when the file was created. Every other operation also
    /// creates a missing document on its first read, so calling this is only
    /// needed to set up a store ahead of use.
    pub fn init(&self) -> Result<bool> {
        self.lock.with_lock(|| {
            let existed = self.ctx.document_path.exists();
            self.read_document()?;
            Ok(!existed)
        })
    }

    /// Read the whole document, creating it empty if absent.
    pub fn load(&self) -> Result<PresetDocument> {
        self.lock.with_lock(|| self.read_document())
    }

    /// Overwrite the whole document.
    pub fn save(&self, doc: &PresetDocument) -> Result<()> {
        self.lock.with_lock(|| self.write_document(doc))
    }

    /// Preset names in stored order.
    pub fn list_names(&self) -> Result<Vec<String>> {
        let doc = self.load()?;
        Ok(doc.names().map(str::to_string).collect())
    }

    /// A copy of one preset.
    pub fn get(&self, name: &str) -> Result<Preset> {
        let doc = self.load()?;
        doc.get(name)
            .cloned()
            .ok_or_else(|| RsetupError::NameNotFound(name.to_string()))
    }

    /// Capture `paths` from `source` into a new preset called `name`.
    ///
    /// Returns the number of captured attributes. The document is left
    /// unchanged when the name is blank or taken, or when any path fails to
    /// resolve on `source`.
    pub fn create<S, T>(&self, name: &str, paths: &[S], source: &T) -> Result<usize>
    where
        S: AsRef<str>,
        T: SettingsTree + ?Sized,
    {
        if name.trim().is_empty() {
            return Err(RsetupError::EmptyName);
        }

        self.lock.with_lock(|| {
            let mut doc = self.read_document()?;
            if doc.contains(name) {
                return Err(RsetupError::DuplicateName(name.to_string()));
            }

            let mut preset = Preset::new();
            for path in paths {
                let path = path.as_ref();
                preset.insert(path.to_string(), source.get(path)?);
            }

            let captured = preset.len();
            doc.insert(name, preset);
            self.write_document(&doc)?;
            info!("added setup '{}' ({} attributes)", name, captured);
            Ok(captured)
        })
    }

    /// Like [`PresetStore::create`], capturing the paths of `groups`.
    pub fn create_from_groups<T>(
        &self,
        name: &str,
        groups: &[FieldGroup],
        source: &T,
    ) -> Result<usize>
    where
        T: SettingsTree + ?Sized,
    {
        let paths = collect_paths(groups);
        self.create(name, paths.as_slice(), source)
    }

    /// Delete a preset and return what it held.
    pub fn remove(&self, name: &str) -> Result<Preset> {
        self.lock.with_lock(|| {
            let mut doc = self.read_document()?;
            let removed = doc
                .remove(name)
                .ok_or_else(|| RsetupError::NameNotFound(name.to_string()))?;
            self.write_document(&doc)?;
            info!("deleted setup '{}'", name);
            Ok(removed)
        })
    }

    /// Write every stored value of `name` into `target`, in stored order.
    ///
    /// Stops at the first path that fails to resolve; assignments already
    /// made are kept. Returns the number of assignments.
    pub fn apply<T>(&self, name: &str, target: &mut T) -> Result<usize>
    where
        T: SettingsTree + ?Sized,
    {
        let preset = self.get(name)?;

        let mut applied = 0;
        for (path, value) in preset {
            target.set(&path, value)?;
            applied += 1;
        }

        info!(
            "applied setup '{}' to {} ({} attributes)",
            name,
            target.type_name(),
            applied
        );
        Ok(applied)
    }

    /// Read the document without taking the lock. A missing document is
    /// written out empty first.
    fn read_document(&self) -> Result<PresetDocument> {
        let path = &self.ctx.document_path;
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!("read preset document '{}'", path.display());
                PresetDocument::parse(&content, path)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let doc = PresetDocument::new();
                self.write_document(&doc)?;
                info!("created preset document '{}'", path.display());
                Ok(doc)
            }
            Err(e) => Err(RsetupError::io("failed to read", path, e)),
        }
    }

    /// Write the document without taking the lock.
    fn write_document(&self, doc: &PresetDocument) -> Result<()> {
        let path = &self.ctx.document_path;
        let json = doc
            .to_json(self.ctx.config.document_indent)
            .map_err(|e| RsetupError::io("failed to serialize", path, e.into()))?;
        atomic_write_file(path, &json)?;
        debug!("wrote preset document '{}' ({} setups)", path.display(), doc.len());
        Ok(())
    }
}
