//! Patch summary and final status lines

use super::style::{Cell, Style};
use super::table::Table;
use crate::manifest::PatchRow;
use std::io::Write;

/// Glyph between old and new values
pub const ARROW: &str = "→";

/// Writes the before → after table of applied upgrades
pub fn write_patch_table(
    rows: &[PatchRow],
    color: bool,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let mut table = Table::new();
    for row in rows {
        table.push_row(vec![
            Cell::plain(&row.package_name),
            Cell::styled(&row.old_value, Style::Warning),
            Cell::styled(ARROW, Style::Muted),
            Cell::styled(&row.new_value, Style::Success),
        ]);
    }

    for line in table.render(color) {
        writeln!(writer, "  {}", line)?;
    }
    Ok(())
}

/// Writes the line reporting that nothing was selected
pub fn write_no_changes(
    display_path: &str,
    color: bool,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let message = format!("No changes made to {}.", display_path);
    if color {
        writeln!(writer, "{}", Style::Muted.paint(&message))
    } else {
        writeln!(writer, "{}", message)
    }
}

/// Writes the confirmation line after a patch
pub fn write_updated(
    display_path: &str,
    count: usize,
    dry_run: bool,
    color: bool,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let noun = if count == 1 { "package" } else { "packages" };
    if dry_run {
        let prefix = if color {
            format!("{} ", Style::Info.paint("(dry-run)"))
        } else {
            "(dry-run) ".to_string()
        };
        return writeln!(
            writer,
            "{}Would update {} {} in {}",
            prefix, count, noun, display_path
        );
    }

    if color {
        writeln!(
            writer,
            "{} {} {}",
            Style::Success.paint("✓"),
            "Successfully updated",
            Style::Bold.paint(display_path)
        )?;
    } else {
        writeln!(writer, "✓ Successfully updated {}", display_path)?;
    }
    writeln!(writer, "  {} {} changed", count, noun)
}
