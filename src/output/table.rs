//! Column-aligned table of styled cells

use super::style::Cell;

/// Columns are separated by this many spaces
const COLUMN_GAP: usize = 2;

/// A borderless table whose columns are aligned on visible width
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Widest visible cell of every column
    ///
    /// Single-cell rows span the whole table and do not widen the first column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in self.rows.iter().filter(|row| row.len() > 1) {
            for (index, cell) in row.iter().enumerate() {
                let width = cell.visible_width();
                match widths.get_mut(index) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Renders one line per row; trailing padding is never emitted
    pub fn render(&self, color: bool) -> Vec<String> {
        let widths = self.column_widths();
        self.rows
            .iter()
            .map(|row| render_row(row, &widths, color))
            .collect()
    }
}

fn render_row(row: &[Cell], widths: &[usize], color: bool) -> String {
    // Cells that render to nothing at the end of a row would only add padding
    let used = row
        .iter()
        .rposition(|cell| cell.visible_width() > 0)
        .map_or(0, |index| index + 1);

    let mut line = String::new();
    for (index, cell) in row[..used].iter().enumerate() {
        if index > 0 {
            line.push_str(&" ".repeat(COLUMN_GAP));
        }
        line.push_str(&cell.render(color));
        if index + 1 < used {
            let width = widths.get(index).copied().unwrap_or(0);
            line.push_str(&" ".repeat(width.saturating_sub(cell.visible_width())));
        }
    }
    line
}
