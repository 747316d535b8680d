//! Interactive multi-select prompt
//!
//! This module provides:
//! - The choice model offered to the operator (items and separators)
//! - A terminal-independent selection state machine
//! - A crossterm driver for real terminals
//! - Non-interactive prompts for `--all` and for tests

mod scripted;
mod state;
mod terminal;

pub use scripted::{AutoSelect, ScriptedPrompt};
pub use state::{MultiSelect, PromptKey, Transition, ITEM_PREFIX_WIDTH};
pub use terminal::{key_from_event, terminal_rows, TerminalPrompt};

use crate::domain::UpdateChoice;
use crate::error::PromptError;
use crate::output::Style;

/// Lines the prompt itself needs besides its page (question, answer, cursor line)
pub const PROMPT_CHROME_LINES: usize = 3;

/// One line offered by the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptChoice {
    /// Non-selectable line
    Separator(String),
    /// Selectable line carrying the upgrade it stands for
    Item {
        /// Pre-rendered line shown while selecting
        label: String,
        /// Echoed once the selection is confirmed
        short: String,
        value: UpdateChoice,
    },
}

impl PromptChoice {
    pub fn separator(text: impl Into<String>) -> Self {
        PromptChoice::Separator(text.into())
    }

    pub fn item(label: impl Into<String>, short: impl Into<String>, value: UpdateChoice) -> Self {
        PromptChoice::Item {
            label: label.into(),
            short: short.into(),
            value,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, PromptChoice::Item { .. })
    }

    pub fn value(&self) -> Option<&UpdateChoice> {
        match self {
            PromptChoice::Item { value, .. } => Some(value),
            PromptChoice::Separator(_) => None,
        }
    }
}

/// Blocking multi-select against some source of operator input
pub trait SelectionPrompt {
    /// Returns the confirmed values in display order, or
    /// [`PromptError::Cancelled`] when the operator aborts
    fn select(
        &mut self,
        question: &str,
        choices: &[PromptChoice],
        page_size: usize,
    ) -> Result<Vec<UpdateChoice>, PromptError>;
}

/// Number of choice lines shown at once
///
/// Already printed error diagnostics stay on screen above the prompt.
/// Unknown terminal height means no paging.
pub fn page_size(terminal_rows: Option<u16>, errors_count: usize) -> usize {
    match terminal_rows {
        Some(rows) => usize::from(rows)
            .saturating_sub(PROMPT_CHROME_LINES)
            .saturating_sub(errors_count)
            .max(1),
        None => usize::MAX,
    }
}

/// Question line shown above the choices
pub fn question_line(question: &str, color: bool) -> String {
    if color {
        format!(
            "{} {} {}",
            Style::Success.paint("?"),
            Style::Bold.paint(question),
            Style::Muted.paint("(space to toggle, enter to confirm)")
        )
    } else {
        format!("? {} (space to toggle, enter to confirm)", question)
    }
}

/// Line left behind once the selection is confirmed
pub fn answer_line(question: &str, shorts: &[&str], color: bool) -> String {
    let answer = shorts.join(", ");
    if color {
        format!(
            "{} {} {}",
            Style::Success.paint("?"),
            Style::Bold.paint(question),
            Style::Info.paint(&answer)
        )
    } else {
        format!("? {} {}", question, answer)
    }
    .trim_end()
    .to_string()
}
