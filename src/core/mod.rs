//! Core editor modules
//!
//! This module contains the editing pipeline:
//! - `paste`: spreadsheet clipboard text to a rectangular grid
//! - `surface`: the live, editable grid and its structural operations
//! - `model`: snapshots read back from the surface
//! - `render`: inline-styled HTML serialization
//! - `session`: one editor instance wiring the above together

pub mod model;
pub mod options;
pub mod output;
pub mod paste;
pub mod render;
pub mod session;
pub mod surface;

// Re-export main types and functions
pub use model::{derive_model, TableModel};
pub use options::EditorConfig;
pub use output::{CapturedOutput, NullOutput, OutputSink};
pub use paste::{is_rectangular, parse_paste, paste_lines};
pub use render::{escape_html, render, HtmlTableGenerator, StyleToggle};
pub use session::EditorSession;
pub use surface::{Populated, Surface, SurfaceManager};

#[cfg(feature = "data-loading")]
pub use paste::parse_csv;
