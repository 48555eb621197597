//! Spreadsheet paste parsing
//!
//! Turns text copied from a spreadsheet (tab-separated cells, one row per
//! line) into a rectangular grid of strings. Ragged rows are padded with
//! empty cells to the widest row. Degenerate input yields an empty grid,
//! which callers treat as "nothing to import".

use lazy_static::lazy_static;
use regex::Regex;

#[cfg(feature = "data-loading")]
use crate::utils::error::EditorResult;

lazy_static! {
    /// `\r\n` and lone `\r` line breaks
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n?").unwrap();
}

/// Split pasted text into content lines
///
/// Line endings are normalized and trailing blank lines removed. Returns no
/// lines for blank input.
pub fn paste_lines(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let normalized = LINE_BREAK.replace_all(text, "\n");
    let mut lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();

    while lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    lines
}

/// Parse tab-separated paste text into a rectangular grid
///
/// # Example
///
/// ```rust
/// use tablecraft::parse_paste;
///
/// assert_eq!(
///     parse_paste("a\tb\tc\nd"),
///     vec![vec!["a", "b", "c"], vec!["d", "", ""]]
/// );
/// assert!(parse_paste("\n  \n").is_empty());
/// ```
pub fn parse_paste(text: &str) -> Vec<Vec<String>> {
    let rows = paste_lines(text)
        .iter()
        .map(|line| line.split('\t').map(|cell| cell.trim().to_string()).collect())
        .collect();

    pad_rows(rows)
}

/// Parse comma-separated text into a rectangular grid
///
/// Quoted fields may contain commas and line breaks. Cells are trimmed,
/// trailing blank records dropped and short records padded, exactly like
/// [`parse_paste`].
#[cfg(feature = "data-loading")]
pub fn parse_csv(text: &str) -> EditorResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }

    while rows
        .last()
        .is_some_and(|row| row.iter().all(|cell| cell.is_empty()))
    {
        rows.pop();
    }

    Ok(pad_rows(rows))
}

/// Right-pad every row with empty cells to the widest row
fn pad_rows(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let max_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(max_cols, String::new());
    }
    rows
}

/// True when every row has the same number of cells
pub fn is_rectangular(rows: &[Vec<String>]) -> bool {
    rows.windows(2).all(|pair| pair[0].len() == pair[1].len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_basic_paste() {
        assert_eq!(parse_paste("a\tb\nc\td"), grid(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn test_ragged_rows_padded() {
        assert_eq!(
            parse_paste("a\tb\tc\nd"),
            grid(&[&["a", "b", "c"], &["d", "", ""]])
        );
    }

    #[test]
    fn test_line_endings() {
        let expected = grid(&[&["a"], &["b"], &["c"]]);
        assert_eq!(parse_paste("a\r\nb\r\nc"), expected);
        assert_eq!(parse_paste("a\rb\rc"), expected);
        assert_eq!(parse_paste("a\r\nb\rc\n"), expected);
    }

    #[test]
    fn test_trailing_blank_lines_dropped() {
        assert_eq!(parse_paste("a\tb\n\n  \n\t\n"), grid(&[&["a", "b"]]));
    }

    #[test]
    fn test_interior_blank_lines_kept() {
        assert_eq!(
            parse_paste("a\tb\n\nc\td"),
            grid(&[&["a", "b"], &["", ""], &["c", "d"]])
        );
    }

    #[test]
    fn test_cells_trimmed() {
        assert_eq!(
            parse_paste("  a \t b\t\n"),
            grid(&[&["a", "b", ""]])
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_paste("").is_empty());
        assert!(parse_paste("   ").is_empty());
        assert!(parse_paste("\n\r\n\t").is_empty());
    }

    #[test]
    fn test_paste_lines() {
        assert_eq!(paste_lines("x\r\ny\n\n"), vec!["x", "y"]);
        assert!(paste_lines(" \n ").is_empty());
    }

    #[test]
    fn test_is_rectangular() {
        assert!(is_rectangular(&parse_paste("a\tb\tc\nd\ne\tf")));
        assert!(!is_rectangular(&grid(&[&["a", "b"], &["c"]])));
        assert!(is_rectangular(&[]));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_csv_basic() {
        let rows = parse_csv("name,age\n\"Lovelace, Ada\",36\nBabbage\n").unwrap();
        assert_eq!(
            rows,
            grid(&[&["name", "age"], &["Lovelace, Ada", "36"], &["Babbage", ""]])
        );
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_csv_empty() {
        assert!(parse_csv("").unwrap().is_empty());
    }
}
