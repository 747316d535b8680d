//! Prompts that do not read from a terminal

use super::{answer_line, MultiSelect, PromptChoice, PromptKey, SelectionPrompt, Transition};
use crate::domain::UpdateChoice;
use crate::error::PromptError;
use std::collections::VecDeque;

/// Selects every offered item without asking
#[derive(Debug, Default)]
pub struct AutoSelect;

impl SelectionPrompt for AutoSelect {
    fn select(
        &mut self,
        _question: &str,
        choices: &[PromptChoice],
        page_size: usize,
    ) -> Result<Vec<UpdateChoice>, PromptError> {
        let mut state = MultiSelect::new(choices, page_size);
        state.handle(PromptKey::ToggleAll);
        Ok(state.selected_values())
    }
}

/// Replays a fixed key sequence; running out of keys counts as cancellation
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    keys: VecDeque<PromptKey>,
    /// Number of selectable items offered by the last prompt
    pub offered_items: usize,
    /// Lines of the last page shown, unstyled
    pub last_page: Vec<String>,
    /// Answer line of the last confirmed prompt
    pub answer: Option<String>,
}

impl ScriptedPrompt {
    pub fn new(keys: impl IntoIterator<Item = PromptKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl SelectionPrompt for ScriptedPrompt {
    fn select(
        &mut self,
        question: &str,
        choices: &[PromptChoice],
        page_size: usize,
    ) -> Result<Vec<UpdateChoice>, PromptError> {
        let mut state = MultiSelect::new(choices, page_size);
        self.offered_items = state.selectable_count();

        while let Some(key) = self.keys.pop_front() {
            self.last_page = state.render_lines(false);
            match state.handle(key) {
                Transition::Pending => {}
                Transition::Confirmed => {
                    self.answer = Some(answer_line(question, &state.selected_shorts(), false));
                    return Ok(state.selected_values());
                }
                Transition::Cancelled => return Err(PromptError::Cancelled),
            }
        }

        Err(PromptError::Cancelled)
    }
}
