//! Terminal output for the review workflow
//!
//! This module provides:
//! - Styled text whose width ignores styling
//! - Column-aligned tables
//! - Diagnostics for failed analyses
//! - The review report and prompt wiring
//! - The patch summary and status lines

mod diagnostic;
mod review;
mod style;
mod summary;
mod table;

pub use diagnostic::write_analysis_error;
pub use review::{ReviewPresenter, ReviewTable, RowKind, PROMPT_LEGEND, PROMPT_QUESTION};
pub use style::{Cell, Span, Style};
pub use summary::{write_no_changes, write_patch_table, write_updated, ARROW};
pub use table::Table;
