//! Comma-delimited text codec shared by the input loaders and the output
//! writer.
//!
//! Rows are split on newlines, then on commas. A field that starts with a
//! quote character runs to its closing quote, with `""` standing for a literal
//! quote; this is how surrounding quotes are stripped and how written values
//! containing commas survive a read back. Fields cannot span lines.

use std::borrow::Cow;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Splits one line into fields, stripping surrounding quotes.
#[must_use]
pub fn split_line(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut at_field_start = true;
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }

        match c {
            DELIMITER => {
                fields.push(std::mem::take(&mut current));
                at_field_start = true;
            }
            QUOTE if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            _ => {
                current.push(c);
                at_field_start = false;
            }
        }
    }
    fields.push(current);
    fields
}

/// Quotes `value` when it contains a delimiter, quote, or line break,
/// doubling any internal quotes.
#[must_use]
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([DELIMITER, QUOTE, '\n', '\r']) {
        Cow::Owned(format!("{QUOTE}{}{QUOTE}", value.replace(QUOTE, "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Joins `cells` into one delimited line without a trailing newline.
#[must_use]
pub fn format_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| escape_field(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Splits `text` into rows of fields, skipping blank lines.
///
/// Each row is paired with its 1-based line number for error reporting.
pub fn parse_rows(text: &str) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, split_line(line)))
}
