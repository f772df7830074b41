//! Live settings trees addressed by dotted attribute paths.
//!
//! A preset captures values from one tree and later writes them into
//! another. The store only needs `get` and `set` by path; anything that can
//! answer those (a scene binding, a JSON file) can act as a source or target.

use crate::error::{Result, RsetupError};
use crate::fs::atomic_write_file;
use crate::store::render_json_with;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Read/write access to a nested settings tree by dotted path.
pub trait SettingsTree {
    /// Name of the root type, used in error messages (e.g. `Scene`).
    fn type_name(&self) -> &str;

    /// Read the value at `path` (`render.resolution_x`).
    fn get(&self, path: &str) -> Result<Value>;

    /// Resolve every segment but the last, then assign the last one.
    fn set(&mut self, path: &str, value: Value) -> Result<()>;
}

/// Split a dotted path into its segments.
///
/// Returns `None` for an empty path or a path with an empty segment
/// (`render..engine`, `.engine`).
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        None
    } else {
        Some(segments)
    }
}

/// How a JSON file was laid out, so it can be written back the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
struct JsonLayout {
    /// Whitespace for one nesting level; `None` for single-line JSON.
    indent: Option<String>,
    trailing_newline: bool,
}

impl Default for JsonLayout {
    fn default() -> Self {
        Self {
            indent: Some(" ".repeat(4)),
            trailing_newline: false,
        }
    }
}

impl JsonLayout {
    /// Infer the layout from file content.
    ///
    /// The first indented line sits one level deep, so its leading
    /// whitespace is one indent unit.
    fn detect(content: &str) -> Self {
        let trailing_newline = content.ends_with('\n');
        let body = content.trim();
        if !body.contains('\n') {
            return Self {
                indent: None,
                trailing_newline,
            };
        }

        let indent = body
            .lines()
            .skip(1)
            .map(|line| {
                line.chars()
                    .take_while(|c| *c == ' ' || *c == '\t')
                    .collect::<String>()
            })
            .find(|unit| !unit.is_empty())
            .or_else(|| Self::default().indent);

        Self {
            indent,
            trailing_newline,
        }
    }

    fn render(&self, root: &Map<String, Value>) -> serde_json::Result<String> {
        let mut json = match &self.indent {
            Some(unit) => render_json_with(root, unit.as_bytes())?,
            None => serde_json::to_string(root)?,
        };
        if self.trailing_newline {
            json.push('\n');
        }
        Ok(json)
    }
}

/// A settings tree held as a nested JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonTree {
    type_name: String,
    root: Map<String, Value>,
    layout: JsonLayout,
}

impl JsonTree {
    /// Wrap a JSON object. Any other JSON value is rejected.
    pub fn new(type_name: impl Into<String>, root: Value) -> Result<Self> {
        let type_name = type_name.into();
        match root {
            Value::Object(root) => Ok(Self {
                type_name,
                root,
                layout: JsonLayout::default(),
            }),
            other => Err(RsetupError::InvalidArgument(format!(
                "{} settings must be a JSON object, found {}",
                type_name,
                json_kind(&other)
            ))),
        }
    }

    /// Load a tree from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P, type_name: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| RsetupError::io("failed to read", path, e))?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| RsetupError::CorruptDocument {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut tree = Self::new(type_name, value).map_err(|e| RsetupError::CorruptDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tree.layout = JsonLayout::detect(&content);
        Ok(tree)
    }

    /// Write the tree to a JSON file.
    ///
    /// A tree read with [`JsonTree::load`] keeps the indentation and the
    /// trailing newline of its source file; other trees use four spaces.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self
            .layout
            .render(&self.root)
            .map_err(|e| RsetupError::io("failed to serialize", path, e.into()))?;
        atomic_write_file(path, &json)
    }

    fn unresolved(&self, path: &str) -> RsetupError {
        RsetupError::PathResolution {
            path: path.to_string(),
            root: self.type_name.clone(),
        }
    }
}

impl SettingsTree for JsonTree {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn get(&self, path: &str) -> Result<Value> {
        let segments = split_path(path).ok_or_else(|| self.unresolved(path))?;

        let mut current = &self.root;
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| self.unresolved(path))?;
        for segment in parents {
            current = current
                .get(*segment)
                .and_then(Value::as_object)
                .ok_or_else(|| self.unresolved(path))?;
        }

        current
            .get(*last)
            .cloned()
            .ok_or_else(|| self.unresolved(path))
    }

    fn set(&mut self, path: &str, value: Value) -> Result<()> {
        let segments = split_path(path).ok_or_else(|| self.unresolved(path))?;
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| self.unresolved(path))?;

        let Some(parent) = resolve_parent_mut(&mut self.root, parents) else {
            return Err(self.unresolved(path));
        };

        parent.insert(last.to_string(), value);
        Ok(())
    }
}

fn resolve_parent_mut<'a>(
    root: &'a mut Map<String, Value>,
    parents: &[&str],
) -> Option<&'a mut Map<String, Value>> {
    let mut current = root;
    for segment in parents {
        current = current.get_mut(*segment)?.as_object_mut()?;
    }
    Some(current)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
