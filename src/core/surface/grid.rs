//! The editable grid: an arena of cell nodes plus ordered rows

use crate::core::model::TableModel;

/// Handle of a cell node in the surface arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(usize);

/// Header cells live in row 0, body cells everywhere else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Header,
    Body,
}

/// A single editable cell
#[derive(Debug, Clone)]
pub struct CellNode {
    pub kind: CellKind,
    /// Current text content, exactly as the user typed it
    pub text: String,
    /// Whether the host should let the user edit this cell
    pub editable: bool,
}

impl CellNode {
    fn new(kind: CellKind, text: String) -> Self {
        CellNode {
            kind,
            text,
            editable: true,
        }
    }
}

/// The live grid the user edits
///
/// Row 0 is the header row; all other rows are body rows. Removed cells
/// leave a free slot that the next insertion reuses.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    nodes: Vec<Option<CellNode>>,
    free: Vec<usize>,
    rows: Vec<Vec<CellId>>,
}

impl Surface {
    /// Build a header row of `Header 1..cols` and `body_rows` empty rows
    pub(crate) fn with_dimensions(body_rows: usize, cols: usize) -> Self {
        let mut surface = Surface::default();

        let header = (1..=cols)
            .map(|c| surface.alloc(CellKind::Header, crate::data::header_label(c)))
            .collect();
        surface.rows.push(header);

        for _ in 0..body_rows {
            surface.push_body_row(cols);
        }
        surface
    }

    fn alloc(&mut self, kind: CellKind, text: String) -> CellId {
        let node = CellNode::new(kind, text);
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                CellId(slot)
            }
            None => {
                self.nodes.push(Some(node));
                CellId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: CellId) {
        if let Some(slot) = self.nodes.get_mut(id.0) {
            if slot.take().is_some() {
                self.free.push(id.0);
            }
        }
    }

    /// Total rows including the header
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn body_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Width of the header row
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of live cell nodes
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn cell_id(&self, row: usize, col: usize) -> Option<CellId> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn cell(&self, id: CellId) -> Option<&CellNode> {
        self.nodes.get(id.0)?.as_ref()
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut CellNode> {
        self.nodes.get_mut(id.0)?.as_mut()
    }

    /// Raw text of the cell at `(row, col)`
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        let id = self.cell_id(row, col)?;
        self.cell(id).map(|node| node.text.as_str())
    }

    /// Overwrite a cell's text; returns false when out of range
    pub fn set_cell_text(&mut self, row: usize, col: usize, text: impl Into<String>) -> bool {
        let Some(id) = self.cell_id(row, col) else {
            return false;
        };
        match self.cell_mut(id) {
            Some(node) => {
                node.text = text.into();
                true
            }
            None => false,
        }
    }

    pub(crate) fn push_body_row(&mut self, cols: usize) {
        let row = (0..cols)
            .map(|_| self.alloc(CellKind::Body, String::new()))
            .collect();
        self.rows.push(row);
    }

    /// Append one cell to every row; the header cell gets `header_text`
    pub(crate) fn push_column(&mut self, header_text: String) {
        for r in 0..self.rows.len() {
            let id = if r == 0 {
                self.alloc(CellKind::Header, header_text.clone())
            } else {
                self.alloc(CellKind::Body, String::new())
            };
            self.rows[r].push(id);
        }
    }

    pub(crate) fn pop_body_row(&mut self) -> bool {
        if self.rows.len() < 2 {
            return false;
        }
        if let Some(row) = self.rows.pop() {
            for id in row {
                self.release(id);
            }
        }
        true
    }

    pub(crate) fn pop_column(&mut self) {
        for r in 0..self.rows.len() {
            if let Some(id) = self.rows[r].pop() {
                self.release(id);
            }
        }
    }

    /// Cells in row-major order, header first
    pub fn cells_in_order(&self) -> impl Iterator<Item = CellId> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Neighbour of a cell in row-major tab order
    ///
    /// `index` is the position of the focused cell in [`Surface::cells_in_order`].
    /// Moving past either end stays on the first or last cell.
    pub fn tab_target(&self, index: usize, backwards: bool) -> Option<usize> {
        let total = self.cell_count();
        if index >= total {
            return None;
        }
        Some(if backwards {
            index.saturating_sub(1)
        } else {
            (index + 1).min(total - 1)
        })
    }

    /// Read the surface back into a model snapshot (trimmed text)
    pub fn to_model(&self) -> TableModel {
        let cells = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&id| {
                        self.cell(id)
                            .map(|node| node.text.trim().to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        TableModel::from_rows(cells)
    }
}
