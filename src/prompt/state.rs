//! Selection state machine behind every prompt implementation

use super::PromptChoice;
use crate::domain::UpdateChoice;
use crate::output::Style;
use std::collections::BTreeSet;
use std::ops::Range;

/// Columns taken by the pointer, the checkbox and the space before an item label
pub const ITEM_PREFIX_WIDTH: usize = 3;

/// Operator input understood by the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Up,
    Down,
    Toggle,
    ToggleAll,
    Invert,
    Confirm,
    Cancel,
}

/// Result of feeding one key to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Pending,
    Confirmed,
    Cancelled,
}

/// Cursor, selection and scroll position over a list of choices
///
/// The selection is a set of choice indices, so toggling is idempotent
/// and the result is always reported in display order.
#[derive(Debug)]
pub struct MultiSelect<'a> {
    choices: &'a [PromptChoice],
    cursor: Option<usize>,
    selected: BTreeSet<usize>,
    page_size: usize,
    offset: usize,
}

impl<'a> MultiSelect<'a> {
    pub fn new(choices: &'a [PromptChoice], page_size: usize) -> Self {
        let mut state = Self {
            choices,
            cursor: choices.iter().position(PromptChoice::is_selectable),
            selected: BTreeSet::new(),
            page_size: page_size.max(1),
            offset: 0,
        };
        state.scroll_to_cursor();
        state
    }

    /// Index of the highlighted choice, `None` if nothing is selectable
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selectable_count(&self) -> usize {
        self.choices.iter().filter(|c| c.is_selectable()).count()
    }

    pub fn handle(&mut self, key: PromptKey) -> Transition {
        match key {
            PromptKey::Up => self.move_cursor(false),
            PromptKey::Down => self.move_cursor(true),
            PromptKey::Toggle => self.toggle_current(),
            PromptKey::ToggleAll => self.toggle_all(),
            PromptKey::Invert => self.invert(),
            PromptKey::Confirm => return Transition::Confirmed,
            PromptKey::Cancel => return Transition::Cancelled,
        }
        Transition::Pending
    }

    /// Selected values in display order
    pub fn selected_values(&self) -> Vec<UpdateChoice> {
        self.selected
            .iter()
            .filter_map(|&index| self.choices[index].value().cloned())
            .collect()
    }

    /// Short forms of the selected items in display order
    pub fn selected_shorts(&self) -> Vec<&'a str> {
        let choices = self.choices;
        self.selected
            .iter()
            .filter_map(move |&index| match &choices[index] {
                PromptChoice::Item { short, .. } => Some(short.as_str()),
                PromptChoice::Separator(_) => None,
            })
            .collect()
    }

    /// Choice indices currently on screen
    pub fn visible_range(&self) -> Range<usize> {
        let end = self
            .offset
            .saturating_add(self.page_size)
            .min(self.choices.len());
        self.offset..end
    }

    /// Lines for the visible page
    pub fn render_lines(&self, color: bool) -> Vec<String> {
        self.visible_range()
            .map(|index| match &self.choices[index] {
                PromptChoice::Separator(text) => text.clone(),
                PromptChoice::Item { label, .. } => {
                    let pointer = if self.cursor == Some(index) { "❯" } else { " " };
                    let checkbox = if self.is_selected(index) { "◉" } else { "◯" };
                    if color {
                        format!(
                            "{}{} {}",
                            Style::Info.paint(pointer),
                            Style::Success.paint(checkbox),
                            label
                        )
                    } else {
                        format!("{}{} {}", pointer, checkbox, label)
                    }
                }
            })
            .collect()
    }

    fn selectable_indices(&self) -> Vec<usize> {
        self.choices
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_selectable())
            .map(|(index, _)| index)
            .collect()
    }

    /// Moves to the next selectable choice, wrapping around the list
    fn move_cursor(&mut self, forward: bool) {
        let Some(start) = self.cursor else {
            return;
        };
        let len = self.choices.len();
        let mut index = start;
        loop {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if index == start {
                break;
            }
            if self.choices[index].is_selectable() {
                self.cursor = Some(index);
                break;
            }
        }
        self.scroll_to_cursor();
    }

    fn toggle_current(&mut self) {
        if let Some(index) = self.cursor {
            if !self.selected.remove(&index) {
                self.selected.insert(index);
            }
        }
    }

    fn toggle_all(&mut self) {
        let all = self.selectable_indices();
        if all.iter().all(|index| self.selected.contains(index)) {
            self.selected.clear();
        } else {
            self.selected.extend(all);
        }
    }

    fn invert(&mut self) {
        for index in self.selectable_indices() {
            if !self.selected.remove(&index) {
                self.selected.insert(index);
            }
        }
    }

    /// Keeps the cursor on screen, along with the separators heading its group
    fn scroll_to_cursor(&mut self) {
        let Some(cursor) = self.cursor else {
            return;
        };

        let mut top = cursor;
        while top > 0
            && !self.choices[top - 1].is_selectable()
            && cursor - (top - 1) < self.page_size
        {
            top -= 1;
        }

        if top < self.offset {
            self.offset = top;
        } else if cursor >= self.offset.saturating_add(self.page_size) {
            self.offset = cursor + 1 - self.page_size;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> PromptChoice {
        PromptChoice::item(
            name,
            name,
            UpdateChoice::new("dependencies", name, format!("^{}.0.0", name.len())),
        )
    }

    fn sample_choices() -> Vec<PromptChoice> {
        vec![
            PromptChoice::separator("Dependencies"),
            item("react"),
            item("lodash"),
            PromptChoice::separator("Dev Dependencies"),
            item("jest"),
            PromptChoice::separator(""),
            PromptChoice::separator("legend"),
        ]
    }

    #[test]
    fn test_cursor_starts_on_first_item() {
        let choices = sample_choices();
        let state = MultiSelect::new(&choices, usize::MAX);
        assert_eq!(state.cursor(), Some(1));
        assert_eq!(state.selectable_count(), 3);
    }

    #[test]
    fn test_cursor_skips_separators_and_wraps() {
        let choices = sample_choices();
        let mut state = MultiSelect::new(&choices, usize::MAX);

        state.handle(PromptKey::Down);
        assert_eq!(state.cursor(), Some(2));
        state.handle(PromptKey::Down);
        assert_eq!(state.cursor(), Some(4));
        state.handle(PromptKey::Down);
        assert_eq!(state.cursor(), Some(1));
        state.handle(PromptKey::Up);
        assert_eq!(state.cursor(), Some(4));
    }

    #[test]
    fn test_toggle_twice_is_noop() {
        let choices = sample_choices();
        let mut state = MultiSelect::new(&choices, usize::MAX);

        state.handle(PromptKey::Toggle);
        assert!(state.is_selected(1));
        state.handle(PromptKey::Toggle);
        assert!(!state.is_selected(1));
        assert!(state.selected_values().is_empty());
    }

    #[test]
    fn test_selection_reported_in_display_order() {
        let choices = sample_choices();
        let mut state = MultiSelect::new(&choices, usize::MAX);

        // select jest first, then react
        state.handle(PromptKey::Up);
        state.handle(PromptKey::Toggle);
        state.handle(PromptKey::Down);
        state.handle(PromptKey::Toggle);

        let names: Vec<_> = state
            .selected_values()
            .into_iter()
            .map(|c| c.package_name)
            .collect();
        assert_eq!(names, vec!["react", "jest"]);
        assert_eq!(state.selected_shorts(), vec!["react", "jest"]);
    }

    #[test]
    fn test_toggle_all_and_invert() {
        let choices = sample_choices();
        let mut state = MultiSelect::new(&choices, usize::MAX);

        state.handle(PromptKey::ToggleAll);
        assert_eq!(state.selected_values().len(), 3);
        state.handle(PromptKey::ToggleAll);
        assert!(state.selected_values().is_empty());

        state.handle(PromptKey::Toggle);
        state.handle(PromptKey::Invert);
        let names: Vec<_> = state
            .selected_values()
            .into_iter()
            .map(|c| c.package_name)
            .collect();
        assert_eq!(names, vec!["lodash", "jest"]);
    }

    #[test]
    fn test_confirm_and_cancel_transitions() {
        let choices = sample_choices();
        let mut state = MultiSelect::new(&choices, usize::MAX);
        assert_eq!(state.handle(PromptKey::Down), Transition::Pending);
        assert_eq!(state.handle(PromptKey::Confirm), Transition::Confirmed);
        assert_eq!(state.handle(PromptKey::Cancel), Transition::Cancelled);
    }

    #[test]
    fn test_no_selectable_choices() {
        let choices = vec![PromptChoice::separator("nothing here")];
        let mut state = MultiSelect::new(&choices, 10);
        assert_eq!(state.cursor(), None);
        state.handle(PromptKey::Down);
        state.handle(PromptKey::Toggle);
        state.handle(PromptKey::ToggleAll);
        assert!(state.selected_values().is_empty());
    }

    #[test]
    fn test_paging_follows_cursor() {
        let choices = sample_choices();
        let mut state = MultiSelect::new(&choices, 2);
        assert_eq!(state.visible_range(), 0..2);

        state.handle(PromptKey::Down);
        assert_eq!(state.visible_range(), 1..3);

        // jest pulls its category header into view
        state.handle(PromptKey::Down);
        assert_eq!(state.visible_range(), 3..5);

        // wrapping back to the top shows the first header again
        state.handle(PromptKey::Down);
        assert_eq!(state.visible_range(), 0..2);
    }

    #[test]
    fn test_render_lines_plain() {
        let choices = sample_choices();
        let mut state = MultiSelect::new(&choices, usize::MAX);
        state.handle(PromptKey::Toggle);

        let lines = state.render_lines(false);
        assert_eq!(lines.len(), choices.len());
        assert_eq!(lines[0], "Dependencies");
        assert_eq!(lines[1], "❯◉ react");
        assert_eq!(lines[2], " ◯ lodash");
    }
}
