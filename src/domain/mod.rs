//! Core domain models for depreview
//!
//! This module contains the fundamental types used throughout the application:
//! - Analysis records handed in by the upstream analysis step
//! - Category display labels
//! - The review model derived from an analysis
//! - Upgrade choices confirmed by the operator

mod analysis;
mod category;
mod choice;
mod review;

pub use analysis::{
    AnalysisErrorDetail, AnalysisSet, AnalysisStatus, CategoryAnalysis, DependencyAnalysis,
    DiffSeverity,
};
pub use category::CategoryLabels;
pub use choice::UpdateChoice;
pub use review::{AnalysisFailure, ReviewModel};
