//! Repair of table separator rows written with two dashes per cell.
//!
//! Rows like `|--|--|` are valid for some Markdown flavours but the preview
//! renderer needs at least three dashes per cell to recognise a table.

use once_cell::sync::Lazy;
use regex::Regex;

static SHORT_SEPARATOR_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\|--)+\|$").expect("separator row pattern is valid"));

/// Whether `line` is a separator row using exactly two dashes in every cell.
pub fn is_short_separator_row(line: &str) -> bool {
    SHORT_SEPARATOR_ROW.is_match(line)
}

/// Widen every two-dash separator row in `markdown` to three dashes per cell.
///
/// Other lines are copied as-is, including whether they end in a newline.
/// A repaired row is always terminated by `\n`.
pub fn repair_tables(markdown: &str) -> String {
    let mut output = String::with_capacity(markdown.len() + 16);

    for chunk in markdown.split_inclusive('\n') {
        let line = chunk.strip_suffix('\n').unwrap_or(chunk);
        if is_short_separator_row(line) {
            output.push_str(&widen_separator_row(line));
            output.push('\n');
        } else {
            output.push_str(chunk);
        }
    }

    output
}

fn widen_separator_row(line: &str) -> String {
    let body = line.strip_suffix('|').unwrap_or(line);
    let cells: Vec<&str> = body
        .split('|')
        .map(|cell| if cell == "--" { "---" } else { cell })
        .collect();

    let mut row = cells.join("|");
    row.push('|');
    row
}
