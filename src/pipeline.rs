//! Review pipeline coordinating the whole session
//!
//! This module provides:
//! - Workflow coordination: classify → present → resolve → patch
//! - The single blocking point at the selection prompt
//! - Dry-run mode support
//!
//! A cancelled prompt returns before the manifest is touched.

use crate::classify::classify;
use crate::domain::{AnalysisSet, CategoryLabels};
use crate::error::AppError;
use crate::manifest::{ManifestDocument, ManifestPatcher};
use crate::output::{write_no_changes, write_patch_table, write_updated, ReviewPresenter};
use crate::prompt::{page_size, SelectionPrompt};
use crate::resolve::{Resolution, SelectionResolver};
use log::info;
use std::io::Write;

/// Terminal state reached by a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Nothing needed review; no prompt was shown
    AllUpToDate,
    /// The operator confirmed an empty selection
    NoChanges,
    /// The manifest was patched (or would have been, in dry-run mode)
    Updated { count: usize, dry_run: bool },
}

/// Pipeline wiring classifier, presenter, resolver and patcher
pub struct Pipeline<'a> {
    labels: &'a CategoryLabels,
    prompt: &'a mut dyn SelectionPrompt,
    resolver: SelectionResolver,
    patcher: ManifestPatcher,
    color: bool,
    terminal_rows: Option<u16>,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline that writes changes and renders without color
    pub fn new(labels: &'a CategoryLabels, prompt: &'a mut dyn SelectionPrompt) -> Self {
        Self {
            labels,
            prompt,
            resolver: SelectionResolver::new(),
            patcher: ManifestPatcher::new(false),
            color: false,
            terminal_rows: None,
        }
    }

    /// Skip the filesystem write (builder pattern)
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.patcher = ManifestPatcher::new(dry_run);
        self
    }

    /// Enable styled output (builder pattern)
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Terminal height used to size the prompt page (builder pattern)
    pub fn with_terminal_rows(mut self, rows: Option<u16>) -> Self {
        self.terminal_rows = rows;
        self
    }

    /// Runs one review session to completion
    ///
    /// The document is consumed; a fresh one must be loaded for any
    /// further work on the same file.
    pub fn run(
        &mut self,
        analysis: &AnalysisSet,
        document: ManifestDocument,
        writer: &mut dyn Write,
    ) -> Result<PipelineOutcome, AppError> {
        let model = classify(analysis, self.color, writer)?;
        let presenter = ReviewPresenter::new(self.labels, self.color);

        if !model.not_latest_exist() {
            presenter.write_all_good(&model, writer)?;
            info!("all dependencies are up to date");
            return Ok(PipelineOutcome::AllUpToDate);
        }

        let page = page_size(self.terminal_rows, model.errors_count());
        writer.flush()?;
        let selected = presenter.review(&model, &mut *self.prompt, page)?;

        match self.resolver.resolve(selected) {
            Resolution::NoChange => {
                write_no_changes(&document.display_path, self.color, writer)?;
                Ok(PipelineOutcome::NoChanges)
            }
            Resolution::Apply(choices) => {
                let display_path = document.display_path.clone();
                let dry_run = self.patcher.is_dry_run();
                let report = self.patcher.patch(document, &choices)?;

                writeln!(writer)?;
                write_patch_table(&report.rows, self.color, writer)?;
                writeln!(writer)?;
                write_updated(&display_path, report.count(), dry_run, self.color, writer)?;

                Ok(PipelineOutcome::Updated {
                    count: report.count(),
                    dry_run,
                })
            }
        }
    }
}
