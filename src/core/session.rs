//! Editor session: one independent editor instance
//!
//! A session owns the surface manager, the style toggle, the output sink and
//! the timers. Every user action goes through it, and every change that
//! affects the output runs the same pipeline:
//!
//! ```text
//! mutate surface -> derive model (read-back) -> render -> sink.deliver
//! ```

use std::time::Duration;

use tracing::debug;

use super::model::TableModel;
use super::options::EditorConfig;
use super::output::OutputSink;
use super::paste::parse_paste;
use super::render::{render, StyleToggle};
use super::surface::{Populated, SurfaceManager};
use crate::data::constants::{clamp_cols, MAX_COLS, MAX_DATA_ROWS, MAX_SURFACE_ROWS, MIN_DATA_ROWS};
use crate::features::clipboard::{copy_with_fallback, Clipboard, CopyFeedback, CopyOutcome};
use crate::features::debounce::Debouncer;
use crate::utils::error::{ImportOutput, ImportWarning};

#[cfg(feature = "data-loading")]
use super::paste::parse_csv;
#[cfg(feature = "data-loading")]
use crate::utils::error::EditorResult;

pub struct EditorSession<S: OutputSink> {
    manager: SurfaceManager,
    toggle: StyleToggle,
    config: EditorConfig,
    sink: S,
    debouncer: Debouncer,
    feedback: CopyFeedback,
    last_output: Option<String>,
}

impl<S: OutputSink> EditorSession<S> {
    /// A session without a table; call [`EditorSession::bootstrap`] to create one
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, EditorConfig::default())
    }

    pub fn with_config(sink: S, config: EditorConfig) -> Self {
        EditorSession {
            manager: SurfaceManager::new(),
            toggle: config.toggle(),
            debouncer: Debouncer::from_millis(config.debounce_ms),
            feedback: CopyFeedback::new(Duration::from_millis(config.copy_feedback_ms)),
            config,
            sink,
            last_output: None,
        }
    }

    /// Create the configured default table
    pub fn bootstrap(&mut self) {
        self.create_surface(self.config.default_rows, self.config.default_cols);
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn manager(&self) -> &SurfaceManager {
        &self.manager
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // ------------------------------------------------------------------
    // Structural operations
    // ------------------------------------------------------------------

    /// Replace the table with an empty one (`rows` includes the header)
    pub fn create_surface(&mut self, rows: usize, cols: usize) {
        self.manager.create_surface(rows, cols);
        self.regenerate();
    }

    /// The "generate" control: `data_rows` excludes the header row
    pub fn generate_table(&mut self, data_rows: usize, cols: usize) {
        let data_rows = data_rows.clamp(MIN_DATA_ROWS, MAX_DATA_ROWS);
        self.create_surface(data_rows + 1, clamp_cols(cols));
    }

    /// Replace the table with `data`; empty data leaves everything as is
    pub fn populate_from_data(&mut self, data: &[Vec<String>]) -> ImportOutput {
        match self.manager.populate_from_data(data) {
            Some(populated) => {
                self.regenerate();
                ImportOutput::with_warnings(self.model(), drop_warnings(populated))
            }
            None => ImportOutput::with_warnings(
                self.model(),
                vec![ImportWarning::new("nothing to import")],
            ),
        }
    }

    /// Import tab-separated text pasted from a spreadsheet
    pub fn import_paste(&mut self, text: &str) -> ImportOutput {
        let data = parse_paste(text);
        self.populate_from_data(&data)
    }

    /// Import comma-separated text
    #[cfg(feature = "data-loading")]
    pub fn import_csv(&mut self, text: &str) -> EditorResult<ImportOutput> {
        let data = parse_csv(text)?;
        Ok(self.populate_from_data(&data))
    }

    pub fn add_row(&mut self) -> bool {
        self.regenerate_if(|m| m.add_row())
    }

    pub fn add_column(&mut self) -> bool {
        self.regenerate_if(|m| m.add_column())
    }

    pub fn delete_row(&mut self) -> bool {
        self.regenerate_if(|m| m.delete_row())
    }

    pub fn delete_column(&mut self) -> bool {
        self.regenerate_if(|m| m.delete_column())
    }

    fn regenerate_if(&mut self, op: impl FnOnce(&mut SurfaceManager) -> bool) -> bool {
        let changed = op(&mut self.manager);
        if changed {
            self.regenerate();
        }
        changed
    }

    // ------------------------------------------------------------------
    // Style toggle
    // ------------------------------------------------------------------

    pub fn toggle(&self) -> StyleToggle {
        self.toggle
    }

    pub fn bold_first_column(&self) -> bool {
        self.toggle.bold_first_column
    }

    pub fn set_bold_first_column(&mut self, bold: bool) {
        self.toggle.bold_first_column = bold;
        self.regenerate();
    }

    // ------------------------------------------------------------------
    // Content edits (debounced)
    // ------------------------------------------------------------------

    /// Write a cell and schedule a debounced regeneration
    ///
    /// Returns the generation of the scheduled pass, for hosts that run
    /// their own timer and call [`EditorSession::fire`]. Returns `None` when
    /// the coordinates are out of range, or when the session regenerates
    /// immediately because its debounce delay is zero.
    pub fn edit_cell(
        &mut self,
        row: usize,
        col: usize,
        text: impl Into<String>,
        now: Duration,
    ) -> Option<u64> {
        if !self.manager.set_cell_text(row, col, text) {
            return None;
        }
        if self.debouncer.delay().is_zero() {
            self.regenerate();
            return None;
        }
        Some(self.debouncer.schedule(now))
    }

    /// Run the pending pass if it is due at `now`
    pub fn tick(&mut self, now: Duration) -> bool {
        let due = self.debouncer.poll(now);
        if due {
            self.regenerate();
        }
        due
    }

    /// Run the pass identified by `generation` unless a newer edit replaced it
    pub fn fire(&mut self, generation: u64) -> bool {
        let current = self.debouncer.fire(generation);
        if current {
            self.regenerate();
        }
        current
    }

    /// Run any pending pass now
    pub fn flush(&mut self) -> bool {
        let pending = self.debouncer.cancel();
        if pending {
            self.regenerate();
        }
        pending
    }

    pub fn has_pending_edit(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.manager.cell_text(row, col)
    }

    pub fn next_cell(&self, index: usize, backwards: bool) -> Option<usize> {
        self.manager.next_cell(index, backwards)
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Fresh snapshot of the surface
    pub fn model(&self) -> TableModel {
        self.manager.derive_model()
    }

    /// Render the current surface without delivering it
    pub fn html(&self) -> String {
        render(&self.model(), self.toggle)
    }

    /// The string most recently delivered to the sink
    pub fn last_output(&self) -> Option<&str> {
        self.last_output.as_deref()
    }

    /// Re-derive, render and deliver; supersedes any pending edit pass
    pub fn regenerate(&mut self) -> &str {
        self.debouncer.cancel();
        let model = self.model();
        let html = render(&model, self.toggle);
        debug!(
            rows = model.row_count(),
            cols = model.col_count(),
            bytes = html.len(),
            "regenerated output"
        );
        self.sink.deliver(&html);
        self.last_output.insert(html).as_str()
    }

    // ------------------------------------------------------------------
    // Copy
    // ------------------------------------------------------------------

    /// Hand the current output to the clipboard and start the acknowledgment
    ///
    /// The acknowledgment starts whatever the outcome; the host's clipboard
    /// paths report success on a best-effort basis only.
    pub fn copy_html<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
        now: Duration,
    ) -> CopyOutcome {
        let html = match self.last_output.as_deref() {
            Some(html) => html.to_string(),
            None => self.html(),
        };
        let outcome = copy_with_fallback(clipboard, &html);
        self.feedback.acknowledge(now);
        outcome
    }

    /// Start the acknowledgment for a copy the host performed itself
    pub fn mark_copied(&mut self, now: Duration) {
        self.feedback.acknowledge(now);
    }

    /// `Some("Copied!")` while the acknowledgment window is open
    pub fn copy_feedback(&self, now: Duration) -> Option<&'static str> {
        self.feedback.label(now)
    }
}

fn drop_warnings(populated: Populated) -> Vec<ImportWarning> {
    let mut warnings = Vec::new();
    if populated.dropped_rows > 0 {
        warnings.push(ImportWarning::with_suggestion(
            format!(
                "{} row{} beyond the {}-row limit dropped",
                populated.dropped_rows,
                if populated.dropped_rows == 1 { "" } else { "s" },
                MAX_SURFACE_ROWS
            ),
            "Split the data into several tables",
        )
        .at_line(MAX_SURFACE_ROWS + 1));
    }
    if populated.dropped_cols > 0 {
        warnings.push(ImportWarning::new(format!(
            "{} column{} beyond the {}-column limit dropped",
            populated.dropped_cols,
            if populated.dropped_cols == 1 { "" } else { "s" },
            MAX_COLS
        )));
    }
    warnings
}
