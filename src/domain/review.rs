//! Review model derived from an analysis set

use super::{AnalysisErrorDetail, AnalysisSet};

/// A dependency whose analysis failed upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    pub category_key: String,
    pub package_name: String,
    pub detail: AnalysisErrorDetail,
}

/// Filtered view of an analysis restricted to entries needing attention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewModel {
    /// Failures in encounter order
    pub errors: Vec<AnalysisFailure>,
    /// Not-latest entries only; every input category is present, possibly empty
    pub not_latest: AnalysisSet,
}

impl ReviewModel {
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }

    /// True iff at least one category has a pending upgrade
    pub fn not_latest_exist(&self) -> bool {
        self.not_latest.categories().iter().any(|c| !c.is_empty())
    }

    /// Number of pending upgrades across all categories
    pub fn pending_count(&self) -> usize {
        self.not_latest.total()
    }
}
