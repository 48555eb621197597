//! Structural edits on the editor surface

use tracing::debug;

use super::grid::Surface;
use crate::core::model::{derive_model, TableModel};
use crate::data::constants::{clamp_cols, clamp_surface_rows, header_label};

/// What an import had to leave out to fit the surface limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Populated {
    pub dropped_rows: usize,
    pub dropped_cols: usize,
}

/// Sole owner of the editor surface
///
/// Every operation is a no-op when it cannot apply (no surface yet, or a
/// delete at its floor) and reports whether the surface changed, so the
/// caller knows when to regenerate output.
#[derive(Debug, Clone, Default)]
pub struct SurfaceManager {
    surface: Option<Surface>,
}

impl SurfaceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Fresh snapshot of the current surface
    pub fn derive_model(&self) -> TableModel {
        derive_model(self.surface.as_ref())
    }

    /// Replace the surface with an empty grid
    ///
    /// `rows` counts the header and is clamped to `[2, 51]`; `cols` is
    /// clamped to `[1, 20]`.
    pub fn create_surface(&mut self, rows: usize, cols: usize) {
        let rows = clamp_surface_rows(rows);
        let cols = clamp_cols(cols);
        debug!(rows, cols, "creating surface");
        self.surface = Some(Surface::with_dimensions(rows - 1, cols));
    }

    /// Replace the surface with imported data
    ///
    /// Returns `None` (and leaves the surface alone) when `data` is empty.
    /// Values beyond the clamped size are dropped and counted.
    pub fn populate_from_data(&mut self, data: &[Vec<String>]) -> Option<Populated> {
        let first = data.first()?;
        self.create_surface(data.len(), first.len());

        let surface = self.surface.as_mut()?;
        let rows = surface.row_count();
        let cols = surface.col_count();

        for r in 0..rows {
            for c in 0..cols {
                let value = data
                    .get(r)
                    .and_then(|row| row.get(c))
                    .map_or("", String::as_str);
                surface.set_cell_text(r, c, value);
            }
        }

        let widest = data.iter().map(Vec::len).max().unwrap_or(0);
        let populated = Populated {
            dropped_rows: data.len().saturating_sub(rows),
            dropped_cols: widest.saturating_sub(cols),
        };
        debug!(
            rows,
            cols,
            dropped_rows = populated.dropped_rows,
            dropped_cols = populated.dropped_cols,
            "populated surface from data"
        );
        Some(populated)
    }

    /// Append an empty body row as wide as the current table
    pub fn add_row(&mut self) -> bool {
        let cols = self.derive_model().col_count();
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        surface.push_body_row(cols);
        debug!(rows = surface.row_count(), "added row");
        true
    }

    /// Append a column; its header cell reads `Header <new column count>`
    pub fn add_column(&mut self) -> bool {
        let cols = self.derive_model().col_count();
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        surface.push_column(header_label(cols + 1));
        debug!(cols = surface.col_count(), "added column");
        true
    }

    /// Remove the last body row, keeping at least one
    pub fn delete_row(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if surface.body_row_count() <= 1 {
            return false;
        }
        surface.pop_body_row();
        debug!(rows = surface.row_count(), "deleted row");
        true
    }

    /// Remove the last column, keeping at least one
    pub fn delete_column(&mut self) -> bool {
        let cols = self.derive_model().col_count();
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        if cols <= 1 {
            return false;
        }
        surface.pop_column();
        debug!(cols = surface.col_count(), "deleted column");
        true
    }

    /// Content edit of a single cell; out-of-range coordinates are ignored
    pub fn set_cell_text(&mut self, row: usize, col: usize, text: impl Into<String>) -> bool {
        self.surface
            .as_mut()
            .is_some_and(|surface| surface.set_cell_text(row, col, text))
    }

    /// Text of a cell as typed (untrimmed)
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.surface.as_ref()?.cell_text(row, col)
    }

    /// Tab-navigation target from the focused cell's row-major index
    pub fn next_cell(&self, index: usize, backwards: bool) -> Option<usize> {
        self.surface.as_ref()?.tab_target(index, backwards)
    }
}
