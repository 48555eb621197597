//! HTML Table Rendering
//!
//! Serializes a table model into one inline-styled HTML fragment with
//! positional style variants.
//!
//! # Architecture
//!
//! ```text
//! TableModel -> HtmlTableGenerator (escape + style lookup) -> HTML string
//! ```
//!
//! # Example
//!
//! ```
//! use tablecraft::core::render::{render, StyleToggle};
//! use tablecraft::TableModel;
//!
//! let model = TableModel::from_rows(vec![
//!     vec!["Name".to_string()],
//!     vec!["Ada".to_string()],
//! ]);
//! let html = render(&model, StyleToggle::default());
//! assert!(html.starts_with("<div style="));
//! assert!(!html.contains('\n'));
//! ```

mod escape;
mod generator;


// Re-export public API
pub use escape::escape_html;
pub use generator::{render, HtmlTableGenerator, StyleToggle};
