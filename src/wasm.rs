//! WASM bindings for tablecraft
//!
//! This module provides a JavaScript-accessible editor object plus a few
//! stateless helpers. The page keeps the DOM; Rust keeps the table. Times are
//! passed in as milliseconds (e.g. `performance.now()`).

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use std::time::Duration;

#[cfg(feature = "wasm")]
use crate::core::output::CapturedOutput;
#[cfg(feature = "wasm")]
use crate::core::session::EditorSession;

/// Import result exposed to JavaScript
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ImportResult {
    /// Rows (header included) after the import
    pub rows: usize,
    /// Columns after the import
    pub cols: usize,
    /// The regenerated fragment
    pub html: String,
    /// Non-fatal import notes (empty paste, clamped size)
    pub warnings: Vec<String>,
}

/// Summary of paste check results
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub has_errors: bool,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn millis(now_ms: f64) -> Duration {
    Duration::from_millis(now_ms.max(0.0) as u64)
}

#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// One editor instance owned by the page
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmEditor {
    session: EditorSession<CapturedOutput>,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmEditor {
    /// Create an editor with the default 4 x 3 table already generated
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmEditor {
        let mut session = EditorSession::new(CapturedOutput::new());
        session.bootstrap();
        WasmEditor { session }
    }

    /// Replace the table; `data_rows` excludes the header
    #[wasm_bindgen(js_name = "generateTable")]
    pub fn generate_table(&mut self, data_rows: usize, cols: usize) -> String {
        self.session.generate_table(data_rows, cols);
        self.current_html()
    }

    /// Import tab-separated clipboard text
    #[wasm_bindgen(js_name = "importPaste")]
    pub fn import_paste(&mut self, text: &str) -> JsValue {
        let out = self.session.import_paste(text);
        let result = ImportResult {
            rows: out.model.row_count(),
            cols: out.model.col_count(),
            html: self.current_html(),
            warnings: out.warnings.iter().map(|w| w.to_string()).collect(),
        };
        to_js(&result)
    }

    /// Returns true when a row was added
    #[wasm_bindgen(js_name = "addRow")]
    pub fn add_row(&mut self) -> bool {
        self.session.add_row()
    }

    #[wasm_bindgen(js_name = "addColumn")]
    pub fn add_column(&mut self) -> bool {
        self.session.add_column()
    }

    #[wasm_bindgen(js_name = "deleteRow")]
    pub fn delete_row(&mut self) -> bool {
        self.session.delete_row()
    }

    #[wasm_bindgen(js_name = "deleteColumn")]
    pub fn delete_column(&mut self) -> bool {
        self.session.delete_column()
    }

    #[wasm_bindgen(js_name = "setBoldFirstColumn")]
    pub fn set_bold_first_column(&mut self, bold: bool) -> String {
        self.session.set_bold_first_column(bold);
        self.current_html()
    }

    /// Record a cell edit
    ///
    /// Returns the generation to pass to `fire` from a `setTimeout` of the
    /// debounce delay, or -1 when nothing was scheduled.
    #[wasm_bindgen(js_name = "editCell")]
    pub fn edit_cell(&mut self, row: usize, col: usize, text: &str, now_ms: f64) -> f64 {
        match self.session.edit_cell(row, col, text, millis(now_ms)) {
            Some(generation) => generation as f64,
            None => -1.0,
        }
    }

    /// Run a debounced pass from a host timer; stale generations are ignored
    pub fn fire(&mut self, generation: f64) -> bool {
        generation >= 0.0 && self.session.fire(generation as u64)
    }

    /// Poll-driven alternative to `fire`
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.session.tick(millis(now_ms))
    }

    pub fn flush(&mut self) -> bool {
        self.session.flush()
    }

    /// Most recently delivered fragment
    pub fn html(&self) -> String {
        self.current_html()
    }

    #[wasm_bindgen(js_name = "cellText")]
    pub fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        self.session.cell_text(row, col).map(str::to_string)
    }

    #[wasm_bindgen(js_name = "rowCount")]
    pub fn row_count(&self) -> usize {
        self.session.manager().surface().map_or(0, |s| s.row_count())
    }

    #[wasm_bindgen(js_name = "colCount")]
    pub fn col_count(&self) -> usize {
        self.session.manager().surface().map_or(0, |s| s.col_count())
    }

    /// Current model as `{ row_count, col_count, cells }`
    pub fn model(&self) -> JsValue {
        to_js(&self.session.model())
    }

    /// Row-major index of the cell Tab (or Shift+Tab) moves to
    #[wasm_bindgen(js_name = "nextCell")]
    pub fn next_cell(&self, index: usize, backwards: bool) -> Option<usize> {
        self.session.next_cell(index, backwards)
    }

    /// Start the acknowledgment after the page wrote the clipboard
    #[wasm_bindgen(js_name = "markCopied")]
    pub fn mark_copied(&mut self, now_ms: f64) {
        self.session.mark_copied(millis(now_ms));
    }

    /// "Copied!" while the acknowledgment window is open
    #[wasm_bindgen(js_name = "copyFeedback")]
    pub fn copy_feedback(&self, now_ms: f64) -> Option<String> {
        self.session.copy_feedback(millis(now_ms)).map(str::to_string)
    }
}

#[cfg(feature = "wasm")]
impl WasmEditor {
    fn current_html(&self) -> String {
        match self.session.last_output() {
            Some(html) => html.to_string(),
            None => self.session.html(),
        }
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmEditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse tab-separated text into a rectangular array of rows
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parsePaste")]
pub fn parse_paste_wasm(text: &str) -> JsValue {
    to_js(&crate::parse_paste(text))
}

/// Convert tab-separated text to the exported fragment
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderTsv")]
pub fn render_tsv_wasm(text: &str, bold_first_column: bool) -> String {
    crate::paste_to_html(text, crate::StyleToggle { bold_first_column })
}

/// Check pasted text for potential issues
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkPaste")]
pub fn check_paste_wasm(text: &str) -> JsValue {
    use crate::diagnostics::DiagnosticLevel;

    let result = crate::diagnostics::check_paste(text);

    // Group diagnostics by level
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        match d.level {
            DiagnosticLevel::Error => errors.push(d.to_string()),
            DiagnosticLevel::Warning => warnings.push(d.to_string()),
            DiagnosticLevel::Info => infos.push(d.to_string()),
        }
    }

    let summary = CheckSummary {
        errors,
        warnings,
        infos,
        has_errors: result.has_errors(),
    };
    to_js(&summary)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
