//! Data layer - static styles and constants
//!
//! This module contains all static data used when building tables:
//! - The inline style catalog and positional cell variants
//! - Surface size limits, labels and timing constants

pub mod constants;
pub mod styles;

// Re-export commonly used items
pub use constants::{
    clamp_cols, clamp_surface_rows, header_label, COPY_FEEDBACK_MS, EDIT_DEBOUNCE_MS,
    EMPTY_TABLE_PLACEHOLDER, MAX_COLS, MAX_SURFACE_ROWS, MIN_COLS, MIN_SURFACE_ROWS,
};
pub use styles::{
    body_cell_style, body_row_style, cell_style, header_cell_style, CellVariant, Section,
    NAMED_STYLES,
};
