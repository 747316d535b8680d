//! Review report and selection prompt for pending upgrades
//!
//! Two modes, picked by whether anything needs review:
//! - all good: one success line per category, no prompt
//! - review: one table of every pending upgrade, turned into a multi-select

use super::style::{Cell, Span, Style};
use super::table::Table;
use crate::domain::{
    CategoryAnalysis, CategoryLabels, DependencyAnalysis, DiffSeverity, ReviewModel, UpdateChoice,
};
use crate::error::PromptError;
use crate::prompt::{PromptChoice, SelectionPrompt, ITEM_PREFIX_WIDTH};
use log::debug;
use std::io::Write;

/// Question asked above the selection list
pub const PROMPT_QUESTION: &str = "Choose which packages to update.";

/// Control-key legend closing the selection list
pub const PROMPT_LEGEND: &str = "Space to toggle. Enter to start upgrading. Control-C to cancel.";

/// What a row of the review table stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Item(UpdateChoice),
}

/// Review table plus the meaning of each of its rows
#[derive(Debug, Clone)]
pub struct ReviewTable {
    pub table: Table,
    pub kinds: Vec<RowKind>,
}

/// Presents a review model to the operator
pub struct ReviewPresenter<'a> {
    labels: &'a CategoryLabels,
    color: bool,
}

impl<'a> ReviewPresenter<'a> {
    pub fn new(labels: &'a CategoryLabels, color: bool) -> Self {
        Self { labels, color }
    }

    /// Writes one success line per category
    pub fn write_all_good(
        &self,
        model: &ReviewModel,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        for category in model.not_latest.categories() {
            writeln!(writer, "{}", self.up_to_date_cell(&category.key).render(self.color))?;
        }
        Ok(())
    }

    /// Builds the table of every pending upgrade, riskiest first per category
    pub fn build_table(&self, model: &ReviewModel) -> ReviewTable {
        let mut table = Table::new();
        let mut kinds = Vec::new();

        for category in model.not_latest.categories() {
            if category.is_empty() {
                table.push_row(vec![self.up_to_date_cell(&category.key)]);
                kinds.push(RowKind::Header);
                continue;
            }

            table.push_row(vec![
                Cell::styled(self.labels.label(&category.key), Style::Bold),
                Cell::styled("current", Style::Warning),
                Cell::styled("latest", Style::Success),
                Cell::empty(),
            ]);
            kinds.push(RowKind::Header);

            for (name, analysis) in sorted_by_severity(category) {
                table.push_row(vec![
                    Cell::plain(name),
                    Cell::plain(analysis.current.clone().unwrap_or_default()),
                    Cell::plain(analysis.latest.clone().unwrap_or_default()),
                    diff_cell(analysis.diff.as_ref()),
                ]);
                kinds.push(RowKind::Item(UpdateChoice::new(
                    &category.key,
                    name,
                    analysis.target_range(),
                )));
            }
        }

        ReviewTable { table, kinds }
    }

    /// Turns the review table into prompt choices
    pub fn build_choices(&self, model: &ReviewModel) -> Vec<PromptChoice> {
        let ReviewTable { table, kinds } = self.build_table(model);
        let lines = table.render(self.color);

        let mut choices: Vec<PromptChoice> = lines
            .into_iter()
            .zip(kinds)
            .map(|(line, kind)| match kind {
                // headers line up with item labels, which follow the prompt gutter
                RowKind::Header => {
                    PromptChoice::separator(format!("{}{}", " ".repeat(ITEM_PREFIX_WIDTH), line))
                }
                RowKind::Item(choice) => {
                    let short = choice.package_name.clone();
                    PromptChoice::item(line, short, choice)
                }
            })
            .collect();

        choices.push(PromptChoice::separator(""));
        choices.push(PromptChoice::separator(
            Span::styled(PROMPT_LEGEND, Style::Muted).render(self.color),
        ));
        choices
    }

    /// Shows the review prompt and blocks until the operator confirms or cancels
    pub fn review(
        &self,
        model: &ReviewModel,
        prompt: &mut dyn SelectionPrompt,
        page_size: usize,
    ) -> Result<Vec<UpdateChoice>, PromptError> {
        let choices = self.build_choices(model);
        debug!(
            "offering {} upgrade(s) with page size {}",
            model.pending_count(),
            page_size
        );
        prompt.select(PROMPT_QUESTION, &choices, page_size)
    }

    fn up_to_date_cell(&self, key: &str) -> Cell {
        Cell::styled(
            format!("✓ {} are up to date", self.labels.label(key)),
            Style::Success,
        )
    }
}

/// Entries of a category ordered most disruptive first, ties kept in original order
fn sorted_by_severity(category: &CategoryAnalysis) -> Vec<(&str, &DependencyAnalysis)> {
    let mut entries: Vec<_> = category.entries().collect();
    entries.sort_by_key(|(_, analysis)| severity_rank(analysis.diff.as_ref()));
    entries
}

fn severity_rank(diff: Option<&DiffSeverity>) -> u8 {
    diff.map_or(u8::MAX, DiffSeverity::rank)
}

fn severity_style(diff: &DiffSeverity) -> Style {
    match diff {
        DiffSeverity::Major => Style::Critical,
        DiffSeverity::Premajor => Style::Danger,
        DiffSeverity::Minor | DiffSeverity::Preminor => Style::Warning,
        DiffSeverity::Patch | DiffSeverity::Prepatch => Style::Success,
        DiffSeverity::Prerelease => Style::Accent,
        DiffSeverity::Other(_) => Style::Muted,
    }
}

fn diff_cell(diff: Option<&DiffSeverity>) -> Cell {
    match diff {
        Some(diff) => Cell::styled(diff.label(), severity_style(diff)),
        None => Cell::styled("?", Style::Muted),
    }
}
