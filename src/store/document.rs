//! The on-disk preset document.
//!
//! The document is a JSON object mapping preset names to presets, and each
//! preset is a JSON object mapping dotted attribute paths to captured values.
//! Key order is the order read from storage and survives rewrites.

use crate::error::{Result, RsetupError};
use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::path::Path;

/// One named snapshot: dotted attribute path to captured value.
pub type Preset = Map<String, Value>;

/// Every preset in a store, keyed by name.
///
/// Every value in `presets` is a JSON object; [`PresetDocument::parse`]
/// rejects documents that break this.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PresetDocument {
    presets: Map<String, Value>,
}

/// Outcome of an additive merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Incoming names that were not present and have been added.
    pub added: Vec<String>,
    /// Incoming names that already existed locally and were left untouched.
    pub skipped: Vec<String>,
}

impl PresetDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document read from `path`.
    ///
    /// Invalid JSON, a non-object top level, or a preset that is not an
    /// object is reported as [`RsetupError::CorruptDocument`].
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let corrupt = |reason: String| RsetupError::CorruptDocument {
            path: path.to_path_buf(),
            reason,
        };

        let value: Value = serde_json::from_str(content).map_err(|e| corrupt(e.to_string()))?;
        let Value::Object(presets) = value else {
            return Err(corrupt("top level is not a JSON object".to_string()));
        };

        if let Some((name, _)) = presets.iter().find(|(_, preset)| !preset.is_object()) {
            return Err(corrupt(format!("preset '{}' is not a JSON object", name)));
        }

        Ok(Self { presets })
    }

    /// Serialize with `indent` spaces per level.
    pub fn to_json(&self, indent: usize) -> serde_json::Result<String> {
        render_json(self, indent)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Preset names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name).and_then(Value::as_object)
    }

    /// Insert or replace a preset. New names are appended.
    pub fn insert(&mut self, name: impl Into<String>, preset: Preset) -> Option<Preset> {
        match self.presets.insert(name.into(), Value::Object(preset)) {
            Some(Value::Object(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Remove a preset, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        match self.presets.shift_remove(name) {
            Some(Value::Object(preset)) => Some(preset),
            _ => None,
        }
    }

    /// Add every incoming preset whose name is not present yet.
    ///
    /// Existing entries are never modified.
    pub fn merge_missing(&mut self, incoming: PresetDocument) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for (name, preset) in incoming.presets {
            if self.presets.contains_key(&name) {
                summary.skipped.push(name);
            } else {
                self.presets.insert(name.clone(), preset);
                summary.added.push(name);
            }
        }

        summary
    }
}

/// Serialize `value` as pretty JSON with `indent` spaces per level.
///
/// An indent of zero still puts every member on its own line.
pub fn render_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<String> {
    render_json_with(value, " ".repeat(indent).as_bytes())
}

/// Serialize `value` as pretty JSON, repeating `unit` once per nesting level.
pub fn render_json_with<T: Serialize + ?Sized>(
    value: &T,
    unit: &[u8],
) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(unit));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}
