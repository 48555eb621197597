//! Table model: the read-only snapshot the renderer consumes
//!
//! A model is always derived from the editor surface by reading it back;
//! it is never edited in place. Any surface mutation makes an existing
//! snapshot stale.

#[cfg(any(feature = "wasm", feature = "data-loading"))]
use serde::Serialize;

use super::surface::Surface;

/// Canonical 2D grid of cell text; row 0 is the header row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(any(feature = "wasm", feature = "data-loading"), derive(Serialize))]
pub struct TableModel {
    row_count: usize,
    col_count: usize,
    cells: Vec<Vec<String>>,
}

impl TableModel {
    /// The model of an editor with no table
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a model from rows; the column count is taken from row 0
    ///
    /// Rows are not padded: a row shorter than `col_count` is read as having
    /// empty trailing cells.
    pub fn from_rows(cells: Vec<Vec<String>>) -> Self {
        let col_count = cells.first().map_or(0, Vec::len);
        if col_count == 0 {
            return Self::empty();
        }
        TableModel {
            row_count: cells.len(),
            col_count,
            cells,
        }
    }

    /// Derive a snapshot from a surface
    pub fn from_surface(surface: &Surface) -> Self {
        surface.to_model()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.col_count == 0
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.cells
    }

    /// Cell text, or `""` for a missing cell
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    pub fn header(&self) -> &[String] {
        self.cells.first().map_or(&[], Vec::as_slice)
    }

    /// Data rows (every row after the header)
    pub fn body(&self) -> &[Vec<String>] {
        self.cells.get(1..).unwrap_or(&[])
    }

    /// True when every row holds exactly `col_count` cells
    pub fn is_rectangular(&self) -> bool {
        self.cells.iter().all(|row| row.len() == self.col_count)
    }
}

/// Read the editor surface back into a model
///
/// No surface (or a surface without rows) yields the empty model.
pub fn derive_model(surface: Option<&Surface>) -> TableModel {
    match surface {
        Some(s) => TableModel::from_surface(s),
        None => TableModel::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_model() {
        let model = TableModel::empty();
        assert_eq!(model.row_count(), 0);
        assert_eq!(model.col_count(), 0);
        assert!(model.is_empty());
        assert!(model.rows().is_empty());
        assert!(model.body().is_empty());
    }

    #[test]
    fn test_from_rows_takes_width_from_header() {
        let model = TableModel::from_rows(rows(&[&["A", "B", "C"], &["1"]]));
        assert_eq!(model.row_count(), 2);
        assert_eq!(model.col_count(), 3);
        assert!(!model.is_rectangular());
        assert_eq!(model.cell(1, 0), "1");
        assert_eq!(model.cell(1, 2), "");
        assert_eq!(model.cell(9, 9), "");
    }

    #[test]
    fn test_zero_width_header_is_empty() {
        let model = TableModel::from_rows(vec![vec![], vec!["x".to_string()]]);
        assert!(model.is_empty());
        assert_eq!(model.row_count(), 0);
    }

    #[test]
    fn test_derive_without_surface() {
        assert_eq!(derive_model(None), TableModel::empty());
    }

    #[test]
    fn test_header_and_body() {
        let model = TableModel::from_rows(rows(&[&["H"], &["a"], &["b"]]));
        assert_eq!(model.header(), &["H".to_string()]);
        assert_eq!(model.body().len(), 2);
    }
}
