//! # tablecraft
//!
//! Spreadsheet-to-HTML table editor core written in Rust.
//!
//! ## Features
//!
//! - **Paste Import**: Tab-separated clipboard text from any spreadsheet
//! - **Editable Surface**: Add/remove rows and columns, edit cells in place
//! - **CMS-Safe Output**: One whitespace-free fragment with `!important` inline styles
//! - **Positional Styling**: Zebra rows, last-row/last-column borders, bold first column
//! - **Debounced Regeneration**: Bursts of keystrokes render once
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### One-shot Conversion
//!
//! ```rust
//! use tablecraft::{paste_to_html, StyleToggle};
//!
//! let html = paste_to_html("Name\tAge\nAda\t36", StyleToggle::default());
//! assert!(html.starts_with("<div style="));
//! assert!(html.contains(">Ada</td>"));
//! ```
//!
//! ### Interactive Session
//!
//! ```rust
//! use std::time::Duration;
//! use tablecraft::{CapturedOutput, EditorSession};
//!
//! let mut session = EditorSession::new(CapturedOutput::new());
//! session.bootstrap();
//! session.add_column();
//! session.edit_cell(1, 0, "apples", Duration::from_millis(0));
//! session.tick(Duration::from_millis(300));
//!
//! let model = session.model();
//! assert_eq!(model.col_count(), 4);
//! assert_eq!(model.cell(1, 0), "apples");
//! assert!(session.last_output().unwrap().contains(">apples</td>"));
//! ```

/// Core editor modules
pub mod core;

/// Data layer - styles and constants
pub mod data;

/// Feature modules - debounce and clipboard
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use core::model::{derive_model, TableModel};
pub use core::options::EditorConfig;
pub use core::output::{CapturedOutput, NullOutput, OutputSink};
pub use core::paste::{is_rectangular, parse_paste};
pub use core::render::{escape_html, render, HtmlTableGenerator, StyleToggle};
pub use core::session::EditorSession;
pub use core::surface::{Surface, SurfaceManager};

#[cfg(feature = "data-loading")]
pub use core::paste::parse_csv;

// Re-export data modules
pub use data::constants;
pub use data::styles;

// Re-export feature types
pub use features::clipboard::{Clipboard, CopyOutcome, MemoryClipboard};
pub use features::debounce::Debouncer;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{
    ClipboardError, EditorError, EditorResult, ImportOutput, ImportWarning,
};

/// Import pasted TSV the way the editor does
///
/// The data goes through a surface, so oversized input is clamped and the
/// dropped rows/columns are reported as warnings.
pub fn paste_to_model(text: &str) -> ImportOutput {
    let mut session = EditorSession::new(NullOutput);
    session.import_paste(text)
}

/// Convert pasted TSV straight to the exported fragment
pub fn paste_to_html(text: &str, toggle: StyleToggle) -> String {
    render(&paste_to_model(text).model, toggle)
}

/// Import CSV the way the editor does
#[cfg(feature = "data-loading")]
pub fn csv_to_model(text: &str) -> EditorResult<ImportOutput> {
    let mut session = EditorSession::new(NullOutput);
    session.import_csv(text)
}

/// HTML of a fresh table with `data_rows` empty body rows
pub fn blank_table_html(data_rows: usize, cols: usize, toggle: StyleToggle) -> String {
    let mut session = EditorSession::new(NullOutput);
    session.generate_table(data_rows, cols);
    render(&session.model(), toggle)
}

/// Detect the delimiter of pasted text
///
/// Returns "tsv", "csv", or "unknown" based on the first non-blank line.
pub fn detect_format(input: &str) -> &'static str {
    let first = input.lines().find(|l| !l.trim().is_empty());
    match first {
        Some(line) if line.contains('\t') => "tsv",
        Some(line) if line.contains(',') => "csv",
        Some(_) => "tsv",
        None => "unknown",
    }
}
