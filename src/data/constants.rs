//! Limits, labels and timing constants shared by the editor core

/// Smallest surface: one header row plus one data row
pub const MIN_SURFACE_ROWS: usize = 2;
/// Largest surface: one header row plus fifty data rows
pub const MAX_SURFACE_ROWS: usize = 51;
pub const MIN_COLS: usize = 1;
pub const MAX_COLS: usize = 20;

/// Data-row bounds accepted by the "generate" control (header excluded)
pub const MIN_DATA_ROWS: usize = 1;
pub const MAX_DATA_ROWS: usize = MAX_SURFACE_ROWS - 1;

/// Surface created when an editor starts: 3 data rows + header, 3 columns
pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLS: usize = 3;

/// Delay that coalesces keystrokes into one regeneration pass
pub const EDIT_DEBOUNCE_MS: u64 = 300;
/// How long the copy acknowledgment stays visible
pub const COPY_FEEDBACK_MS: u64 = 2000;
pub const COPY_FEEDBACK_LABEL: &str = "Copied!";

/// Rendered in place of a table when the model has no data
pub const EMPTY_TABLE_PLACEHOLDER: &str = "<!-- No table data -->";

/// Label for a freshly created header cell (1-indexed column number)
pub fn header_label(column_number: usize) -> String {
    format!("Header {}", column_number)
}

/// Clamp a requested surface row count (header included)
pub fn clamp_surface_rows(rows: usize) -> usize {
    rows.clamp(MIN_SURFACE_ROWS, MAX_SURFACE_ROWS)
}

pub fn clamp_cols(cols: usize) -> usize {
    cols.clamp(MIN_COLS, MAX_COLS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_surface_rows(0), 2);
        assert_eq!(clamp_surface_rows(1000), 51);
        assert_eq!(clamp_surface_rows(10), 10);
        assert_eq!(clamp_cols(0), 1);
        assert_eq!(clamp_cols(21), 20);
    }

    #[test]
    fn test_header_label() {
        assert_eq!(header_label(1), "Header 1");
        assert_eq!(header_label(12), "Header 12");
    }
}
