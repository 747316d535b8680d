//! Styled text with a visible width that ignores styling
//!
//! Text and style are kept apart until rendering, so column widths are
//! measured on the text alone and escape sequences never count.

use colored::Colorize;

/// Presentation style of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Bold,
    Muted,
    Success,
    Warning,
    Danger,
    /// Bold red, for breaking changes
    Critical,
    Accent,
    Info,
}

impl Style {
    /// Applies this style to a piece of text
    pub fn paint(self, text: &str) -> String {
        match self {
            Style::Plain => text.to_string(),
            Style::Bold => text.bold().to_string(),
            Style::Muted => text.dimmed().to_string(),
            Style::Success => text.green().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Danger => text.red().to_string(),
            Style::Critical => text.red().bold().to_string(),
            Style::Accent => text.magenta().to_string(),
            Style::Info => text.cyan().to_string(),
        }
    }
}

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Plain)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Number of terminal columns the text occupies
    ///
    /// Counts one column per `char`. Double-width glyphs (CJK, most emoji)
    /// are undercounted, so a `--label` using them shifts its header row.
    pub fn visible_width(&self) -> usize {
        self.text.chars().count()
    }

    pub fn render(&self, color: bool) -> String {
        if color {
            self.style.paint(&self.text)
        } else {
            self.text.clone()
        }
    }
}

/// A table cell made of one or more spans
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    spans: Vec<Span>,
}

impl Cell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Span::plain(text).into()
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Span::styled(text, style).into()
    }

    /// Appends a span (builder pattern)
    pub fn push(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    pub fn visible_width(&self) -> usize {
        self.spans.iter().map(Span::visible_width).sum()
    }

    /// Text without any styling
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn render(&self, color: bool) -> String {
        self.spans.iter().map(|s| s.render(color)).collect()
    }
}

impl From<Span> for Cell {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}
