//! Terminal output helpers.
//!
//! All user-facing output goes through here so every command styles things
//! the same way. The diff table mirrors the two vaults side by side with a
//! visual indicator per row: red for missing, yellow for changed, green for
//! unchanged.

use std::io::{self, Write as IoWrite};

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::core::diff::{DiffItem, DiffProperty, DiffType};

/// Print a green success message.
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a dim hint to stderr.
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Start a `label... ` progress line; finish with [`progress_done`].
pub fn progress(label: &str) {
    print!("{}... ", style(label).dim());
    let _ = io::stdout().flush();
}

/// Finish a progress line.
pub fn progress_done(ok: bool) {
    if ok {
        println!("{}", style("ok").green());
    } else {
        println!("{}", style("failed").red());
    }
}

/// Build the two-column diff table.
///
/// One row per diff item, ordered as the engine emitted them; columns are
/// headed by the vault labels.
pub fn diff_table(left_label: &str, right_label: &str, items: &[DiffItem<'_>]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![left_label, right_label]);

    for item in items {
        match item.diff_type {
            DiffType::LeftOnly => {
                table.add_row(vec![
                    item.sort_key().to_string(),
                    style("missing").red().to_string(),
                ]);
            }
            DiffType::RightOnly => {
                table.add_row(vec![
                    style("missing").red().to_string(),
                    item.sort_key().to_string(),
                ]);
            }
            DiffType::Modified => {
                table.add_row(vec![
                    modified_cell(item.sort_key(), &item.differences, PropertySide::Left),
                    modified_cell(item.sort_key(), &item.differences, PropertySide::Right),
                ]);
            }
            DiffType::Unmodified => {
                let value = item
                    .left
                    .or(item.right)
                    .map(|s| s.value.as_str())
                    .unwrap_or_default();
                let cell = style(format!("{}\n{}", item.sort_key(), value))
                    .green()
                    .to_string();
                table.add_row(vec![cell.clone(), cell]);
            }
        }
    }

    table
}

enum PropertySide {
    Left,
    Right,
}

/// Name plus one `Property: value` line per changed property.
fn modified_cell(name: &str, differences: &[DiffProperty], side: PropertySide) -> String {
    let mut cell = style(name).yellow().to_string();
    for diff in differences {
        let value = match side {
            PropertySide::Left => diff.left_value.as_deref(),
            PropertySide::Right => diff.right_value.as_deref(),
        };
        let rendered = match value {
            Some(v) => style(v).yellow().to_string(),
            None => style("(unset)").dim().to_string(),
        };
        cell.push_str(&format!("\n{}: {}", diff.property_name, rendered));
    }
    cell
}
