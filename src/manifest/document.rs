//! In-memory manifest document

use crate::error::ManifestError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed manifest plus where it came from and where it goes
///
/// `content` keeps the key order of the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    pub content: Value,
    /// File the manifest was read from
    pub path: PathBuf,
    /// Distinct file to write to, if any
    pub output_path: Option<PathBuf>,
    /// Path shown to the operator
    pub display_path: String,
}

impl ManifestDocument {
    /// Parses manifest text; the root must be a JSON object
    pub fn parse(content: &str, path: impl Into<PathBuf>) -> Result<Self, ManifestError> {
        let path = path.into();
        let content: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(&path, e.to_string()))?;

        if !content.is_object() {
            return Err(ManifestError::invalid_structure(
                &path,
                "top-level value is not an object",
            ));
        }

        Ok(Self {
            content,
            display_path: path.display().to_string(),
            path,
            output_path: None,
        })
    }

    /// Reads and parses a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = read_manifest(path)?;
        Self::parse(&content, path)
    }

    /// Sets a distinct output path (builder pattern)
    pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> Self {
        self.output_path = output_path;
        self
    }

    /// Sets the path shown to the operator (builder pattern)
    pub fn with_display_path(mut self, display_path: impl Into<String>) -> Self {
        self.display_path = display_path.into();
        self
    }

    /// Where the patched manifest will be written
    pub fn target_path(&self) -> &Path {
        self.output_path.as_deref().unwrap_or(&self.path)
    }

    /// Dependency map of a category, if the manifest declares it
    pub fn category(&self, key: &str) -> Option<&Map<String, Value>> {
        self.content.get(key).and_then(Value::as_object)
    }

    /// Declared range of a package in a category
    pub fn range(&self, category: &str, package: &str) -> Option<&str> {
        self.category(category)
            .and_then(|deps| deps.get(package))
            .and_then(Value::as_str)
    }
}

/// Read a manifest file content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
