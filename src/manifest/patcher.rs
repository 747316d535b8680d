//! Applying confirmed upgrades to a manifest
//!
//! This module provides:
//! - ManifestPatcher for overwriting declared ranges in place
//! - Dry-run mode support (no file is written)
//! - Two-space pretty printing with a trailing newline

use super::document::{write_manifest, ManifestDocument};
use crate::domain::UpdateChoice;
use crate::error::ManifestError;
use log::{debug, info};
use serde_json::Value;
use std::path::PathBuf;

/// One applied change, in selection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRow {
    pub package_name: String,
    pub old_value: String,
    pub new_value: String,
}

/// Outcome of patching a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub rows: Vec<PatchRow>,
    /// File that was written; `None` in dry-run mode
    pub written_to: Option<PathBuf>,
}

impl PatchReport {
    /// Number of packages changed
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Patches manifest documents with confirmed upgrades
pub struct ManifestPatcher {
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

impl ManifestPatcher {
    /// Create a new ManifestPatcher
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Check if this patcher is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Overwrites the selected ranges in the document content
    ///
    /// Existing keys keep their position. A choice addressing a category
    /// or package the manifest does not declare is rejected and leaves
    /// the document in a partially patched state.
    pub fn apply(
        &self,
        document: &mut ManifestDocument,
        choices: &[UpdateChoice],
    ) -> Result<Vec<PatchRow>, ManifestError> {
        let mut rows = Vec::with_capacity(choices.len());

        for choice in choices {
            let slot = document
                .content
                .get_mut(&choice.category_key)
                .and_then(Value::as_object_mut)
                .and_then(|deps| deps.get_mut(&choice.package_name))
                .ok_or_else(|| {
                    ManifestError::missing_entry(&choice.category_key, &choice.package_name)
                })?;

            let old_value = match &*slot {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            *slot = Value::String(choice.latest_range.clone());

            debug!(
                "{}.{}: {} -> {}",
                choice.category_key, choice.package_name, old_value, choice.latest_range
            );
            rows.push(PatchRow {
                package_name: choice.package_name.clone(),
                old_value,
                new_value: choice.latest_range.clone(),
            });
        }

        Ok(rows)
    }

    /// Applies the choices and writes the result to the target path
    ///
    /// The document is consumed: its content no longer matches the file
    /// it was read from.
    pub fn patch(
        &self,
        mut document: ManifestDocument,
        choices: &[UpdateChoice],
    ) -> Result<PatchReport, ManifestError> {
        let rows = self.apply(&mut document, choices)?;

        if self.dry_run {
            info!("dry-run: skipping write of {}", document.display_path);
            return Ok(PatchReport {
                rows,
                written_to: None,
            });
        }

        let target = document.target_path().to_path_buf();
        let content = serialize(&document.content)
            .map_err(|e| ManifestError::json_parse_error(&target, e.to_string()))?;
        write_manifest(&target, &content)?;
        info!("wrote {} change(s) to {}", rows.len(), target.display());

        Ok(PatchReport {
            rows,
            written_to: Some(target),
        })
    }
}

/// Two-space indented JSON followed by a single newline
pub fn serialize(content: &Value) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(content)?;
    text.push('\n');
    Ok(text)
}
