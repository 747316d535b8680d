//! Partitioning of analysis results into errors and pending upgrades

use crate::domain::{AnalysisErrorDetail, AnalysisFailure, AnalysisSet, ReviewModel};
use crate::output::write_analysis_error;
use log::debug;
use std::io::Write;

/// Derives the review model from an analysis set
///
/// A diagnostic is written for every failed analysis, in category order
/// and then encounter order. When at least one was written, a blank line
/// separates them from whatever follows. Every input category is kept in
/// the returned model, even when nothing in it needs review.
pub fn classify(
    analysis: &AnalysisSet,
    color: bool,
    writer: &mut dyn Write,
) -> std::io::Result<ReviewModel> {
    let mut errors = Vec::new();
    let mut not_latest = AnalysisSet::new();

    for category in analysis.categories() {
        let filtered = not_latest.category_mut(&category.key);

        for (name, record) in category.entries() {
            if record.is_error() {
                let failure = AnalysisFailure {
                    category_key: category.key.clone(),
                    package_name: name.to_string(),
                    detail: record
                        .error
                        .clone()
                        .unwrap_or_else(|| AnalysisErrorDetail::new("analysis failed")),
                };
                write_analysis_error(&failure, color, writer)?;
                errors.push(failure);
            } else if record.is_not_latest() {
                filtered.insert(name, record.clone());
            }
        }
    }

    if !errors.is_empty() {
        writeln!(writer)?;
    }

    let model = ReviewModel { errors, not_latest };
    debug!(
        "classified {} record(s): {} error(s), {} pending upgrade(s)",
        analysis.total(),
        model.errors_count(),
        model.pending_count()
    );
    Ok(model)
}
