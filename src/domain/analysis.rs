//! Dependency analysis records as produced by the upstream analysis step
//!
//! An [`AnalysisSet`] keeps its category keys and, within each category,
//! its package names as ordered sequences. Display order is taken from
//! these sequences and never from the iteration order of a map type.

use crate::error::AnalysisLoadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Outcome of analysing a single dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisStatus {
    /// Already at the latest version
    Ok,
    /// A newer version is available
    NotLatest,
    /// The analysis itself failed
    Error,
}

/// How disruptive a version change is
///
/// Only used to pick a display color and a sort priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiffSeverity {
    Major,
    Premajor,
    Minor,
    Preminor,
    Patch,
    Prepatch,
    Prerelease,
    /// Any tag the analysis step emits that is not listed above
    Other(String),
}

impl DiffSeverity {
    /// Sort priority, lower values are more disruptive
    pub fn rank(&self) -> u8 {
        match self {
            DiffSeverity::Major => 0,
            DiffSeverity::Premajor => 1,
            DiffSeverity::Minor => 2,
            DiffSeverity::Preminor => 3,
            DiffSeverity::Patch => 4,
            DiffSeverity::Prepatch => 5,
            DiffSeverity::Prerelease => 6,
            DiffSeverity::Other(_) => 7,
        }
    }

    /// The tag as written by the analysis step
    pub fn label(&self) -> &str {
        match self {
            DiffSeverity::Major => "major",
            DiffSeverity::Premajor => "premajor",
            DiffSeverity::Minor => "minor",
            DiffSeverity::Preminor => "preminor",
            DiffSeverity::Patch => "patch",
            DiffSeverity::Prepatch => "prepatch",
            DiffSeverity::Prerelease => "prerelease",
            DiffSeverity::Other(tag) => tag,
        }
    }
}

impl From<String> for DiffSeverity {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "major" => DiffSeverity::Major,
            "premajor" => DiffSeverity::Premajor,
            "minor" => DiffSeverity::Minor,
            "preminor" => DiffSeverity::Preminor,
            "patch" => DiffSeverity::Patch,
            "prepatch" => DiffSeverity::Prepatch,
            "prerelease" => DiffSeverity::Prerelease,
            _ => DiffSeverity::Other(tag),
        }
    }
}

impl From<DiffSeverity> for String {
    fn from(severity: DiffSeverity) -> Self {
        severity.label().to_string()
    }
}

impl fmt::Display for DiffSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured detail of a failed analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisErrorDetail {
    /// Human readable message
    pub message: String,
    /// Optional machine readable code (e.g. `E404`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl AnalysisErrorDetail {
    /// Creates a new error detail without a code
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Sets the error code (builder pattern)
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for AnalysisErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

/// Analysis result for one dependency of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyAnalysis {
    pub status: AnalysisStatus,
    /// Version currently in use; absent when the analysis failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    /// Range expression to write into the manifest, e.g. `^2.1.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<DiffSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AnalysisErrorDetail>,
}

impl DependencyAnalysis {
    /// Dependency already at its latest version
    pub fn ok(current: impl Into<String>) -> Self {
        let current = current.into();
        Self {
            status: AnalysisStatus::Ok,
            latest: Some(current.clone()),
            latest_range: None,
            current: Some(current),
            diff: None,
            error: None,
        }
    }

    /// Dependency with a newer version available
    pub fn not_latest(
        current: impl Into<String>,
        latest: impl Into<String>,
        latest_range: impl Into<String>,
        diff: DiffSeverity,
    ) -> Self {
        Self {
            status: AnalysisStatus::NotLatest,
            current: Some(current.into()),
            latest: Some(latest.into()),
            latest_range: Some(latest_range.into()),
            diff: Some(diff),
            error: None,
        }
    }

    /// Dependency whose analysis failed
    pub fn failed(error: AnalysisErrorDetail) -> Self {
        Self {
            status: AnalysisStatus::Error,
            current: None,
            latest: None,
            latest_range: None,
            diff: None,
            error: Some(error),
        }
    }

    pub fn is_not_latest(&self) -> bool {
        self.status == AnalysisStatus::NotLatest
    }

    pub fn is_error(&self) -> bool {
        self.status == AnalysisStatus::Error
    }

    /// Range to substitute into the manifest
    ///
    /// Falls back to the bare latest version when no range was supplied.
    pub fn target_range(&self) -> String {
        self.latest_range
            .clone()
            .or_else(|| self.latest.clone())
            .unwrap_or_default()
    }
}

/// Analysis of every dependency in one manifest category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAnalysis {
    /// Category key, e.g. `devDependencies`
    pub key: String,
    entries: Vec<(String, DependencyAnalysis)>,
}

impl CategoryAnalysis {
    /// Creates an empty category
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces the analysis for a package
    ///
    /// Replacing keeps the package at its original position.
    pub fn insert(&mut self, name: impl Into<String>, analysis: DependencyAnalysis) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = analysis,
            None => self.entries.push((name, analysis)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&DependencyAnalysis> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, analysis)| analysis)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DependencyAnalysis)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-category, per-dependency analysis of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSet {
    categories: Vec<CategoryAnalysis>,
}

impl AnalysisSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the category with the given key, creating it at the end if missing
    pub fn category_mut(&mut self, key: &str) -> &mut CategoryAnalysis {
        let index = match self.categories.iter().position(|c| c.key == key) {
            Some(index) => index,
            None => {
                self.categories.push(CategoryAnalysis::new(key));
                self.categories.len() - 1
            }
        };
        &mut self.categories[index]
    }

    /// Inserts a record, creating its category when needed
    pub fn insert(
        &mut self,
        category: &str,
        name: impl Into<String>,
        analysis: DependencyAnalysis,
    ) {
        self.category_mut(category).insert(name, analysis);
    }

    /// Builder-style variant of [`AnalysisSet::insert`]
    pub fn with(
        mut self,
        category: &str,
        name: impl Into<String>,
        analysis: DependencyAnalysis,
    ) -> Self {
        self.insert(category, name, analysis);
        self
    }

    pub fn category(&self, key: &str) -> Option<&CategoryAnalysis> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Categories in their original order
    pub fn categories(&self) -> &[CategoryAnalysis] {
        &self.categories
    }

    /// Category keys in their original order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    /// Total number of records across all categories
    pub fn total(&self) -> usize {
        self.categories.iter().map(CategoryAnalysis::len).sum()
    }

    /// Parses a JSON snapshot of the form
    /// `{ "<category>": { "<package>": { "status": ..., ... } } }`
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self, AnalysisLoadError> {
        let root: Value = serde_json::from_str(content)
            .map_err(|e| AnalysisLoadError::parse_error(path, e.to_string()))?;

        let categories = root
            .as_object()
            .ok_or_else(|| AnalysisLoadError::parse_error(path, "expected a JSON object"))?;

        let mut set = AnalysisSet::new();
        for (key, packages) in categories {
            let packages = packages.as_object().ok_or_else(|| {
                AnalysisLoadError::parse_error(
                    path,
                    format!("category '{}' is not a JSON object", key),
                )
            })?;

            let category = set.category_mut(key);
            for (name, record) in packages {
                let analysis: DependencyAnalysis = serde_json::from_value(record.clone())
                    .map_err(|e| {
                        AnalysisLoadError::parse_error(
                            path,
                            format!("invalid record for '{}' in '{}': {}", name, key, e),
                        )
                    })?;
                category.insert(name.clone(), analysis);
            }
        }

        Ok(set)
    }

    /// Reads and parses a JSON snapshot from disk
    pub fn load(path: &Path) -> Result<Self, AnalysisLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalysisLoadError::read_error(path, e))?;
        Self::from_json_str(&content, path)
    }
}
