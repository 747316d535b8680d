//! Crossterm driver for the multi-select prompt

use super::{
    answer_line, question_line, MultiSelect, PromptChoice, PromptKey, SelectionPrompt, Transition,
};
use crate::domain::UpdateChoice;
use crate::error::PromptError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use log::debug;
use std::io::{self, Write};

/// Height of the attached terminal, if it can be determined
pub fn terminal_rows() -> Option<u16> {
    terminal::size().ok().map(|(_, rows)| rows)
}

/// Maps a key press to a prompt key; anything else is ignored
pub fn key_from_event(key: KeyEvent) -> Option<PromptKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(PromptKey::Cancel)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(PromptKey::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PromptKey::Down),
        KeyCode::Char(' ') => Some(PromptKey::Toggle),
        KeyCode::Char('a') => Some(PromptKey::ToggleAll),
        KeyCode::Char('i') => Some(PromptKey::Invert),
        KeyCode::Enter => Some(PromptKey::Confirm),
        KeyCode::Esc => Some(PromptKey::Cancel),
        _ => None,
    }
}

/// Restores the terminal when the prompt returns or unwinds
struct RawModeGuard;

impl RawModeGuard {
    fn enable(out: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = RawModeGuard;
        execute!(out, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Prompt reading keys from the attached terminal
pub struct TerminalPrompt {
    color: bool,
}

impl TerminalPrompt {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl SelectionPrompt for TerminalPrompt {
    fn select(
        &mut self,
        question: &str,
        choices: &[PromptChoice],
        page_size: usize,
    ) -> Result<Vec<UpdateChoice>, PromptError> {
        let mut state = MultiSelect::new(choices, page_size);
        let mut out = io::stdout();
        let _guard = RawModeGuard::enable(&mut out)?;

        let mut drawn = 0;
        loop {
            drawn = draw(&mut out, question, &state, drawn, self.color)?;

            let transition = match event::read()? {
                Event::Key(key) => match key_from_event(key) {
                    Some(prompt_key) => state.handle(prompt_key),
                    None => Transition::Pending,
                },
                _ => Transition::Pending,
            };

            match transition {
                Transition::Pending => continue,
                Transition::Confirmed => {
                    clear(&mut out, drawn)?;
                    let shorts = state.selected_shorts();
                    queue!(
                        out,
                        Print(answer_line(question, &shorts, self.color)),
                        Print("\r\n")
                    )?;
                    out.flush()?;
                    debug!("prompt confirmed with {} selection(s)", shorts.len());
                    return Ok(state.selected_values());
                }
                Transition::Cancelled => {
                    clear(&mut out, drawn)?;
                    out.flush()?;
                    debug!("prompt cancelled");
                    return Err(PromptError::Cancelled);
                }
            }
        }
    }
}

/// Redraws the prompt in place and returns the number of lines drawn
fn draw(
    out: &mut impl Write,
    question: &str,
    state: &MultiSelect<'_>,
    previously_drawn: u16,
    color: bool,
) -> io::Result<u16> {
    clear(out, previously_drawn)?;

    let mut lines = vec![question_line(question, color)];
    lines.extend(state.render_lines(color));
    for line in &lines {
        // raw mode: newlines do not return the carriage
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()?;

    Ok(u16::try_from(lines.len()).unwrap_or(u16::MAX))
}

fn clear(out: &mut impl Write, drawn: u16) -> io::Result<()> {
    if drawn > 0 {
        queue!(out, cursor::MoveUp(drawn))?;
    }
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::FromCursorDown)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_from_event(press(KeyCode::Up)), Some(PromptKey::Up));
        assert_eq!(key_from_event(press(KeyCode::Char('k'))), Some(PromptKey::Up));
        assert_eq!(key_from_event(press(KeyCode::Down)), Some(PromptKey::Down));
        assert_eq!(
            key_from_event(press(KeyCode::Char('j'))),
            Some(PromptKey::Down)
        );
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(
            key_from_event(press(KeyCode::Char(' '))),
            Some(PromptKey::Toggle)
        );
        assert_eq!(
            key_from_event(press(KeyCode::Char('a'))),
            Some(PromptKey::ToggleAll)
        );
        assert_eq!(
            key_from_event(press(KeyCode::Char('i'))),
            Some(PromptKey::Invert)
        );
        assert_eq!(key_from_event(press(KeyCode::Enter)), Some(PromptKey::Confirm));
    }

    #[test]
    fn test_cancel_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_from_event(ctrl_c), Some(PromptKey::Cancel));
        assert_eq!(key_from_event(press(KeyCode::Esc)), Some(PromptKey::Cancel));
        // plain 'c' does nothing
        assert_eq!(key_from_event(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(key_from_event(release), None);
    }

    #[test]
    fn test_draw_counts_lines() {
        let choices = vec![
            PromptChoice::separator("Dependencies"),
            PromptChoice::item("a", "a", UpdateChoice::new("dependencies", "a", "^2.0.0")),
        ];
        let state = MultiSelect::new(&choices, usize::MAX);
        let mut buffer = Vec::new();

        let drawn = draw(&mut buffer, "Pick", &state, 0, false).unwrap();
        assert_eq!(drawn, 3);

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("? Pick"));
        assert!(output.contains("❯◯ a"));
    }
}
