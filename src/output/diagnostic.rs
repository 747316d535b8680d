//! Diagnostics for dependencies whose analysis failed

use super::Style;
use crate::domain::AnalysisFailure;
use std::io::Write;

/// Writes one diagnostic line for a failed analysis
pub fn write_analysis_error(
    failure: &AnalysisFailure,
    color: bool,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    if color {
        writeln!(
            writer,
            "{} {} {} {}",
            Style::Danger.paint("✗"),
            Style::Bold.paint(&failure.package_name),
            Style::Muted.paint(&format!("({})", failure.category_key)),
            failure.detail
        )
    } else {
        writeln!(
            writer,
            "✗ {} ({}) {}",
            failure.package_name, failure.category_key, failure.detail
        )
    }
}
