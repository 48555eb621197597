//! Paste diagnostics
//!
//! Inspects raw clipboard text before it is imported and reports what the
//! importer will do with it:
//!
//! - Ragged lines that will be padded with empty cells
//! - Row or column counts beyond the surface limits (data will be dropped)
//! - Comma-separated text pasted where tab-separated text is expected
//! - Markup characters that will be escaped in the output
//!
//! ## Example
//!
//! ```rust
//! use tablecraft::diagnostics::{check_paste, DiagnosticLevel};
//!
//! let result = check_paste("a\tb\tc\nd");
//! assert_eq!(result.warnings, 1);
//! assert!(!result.has_errors());
//! ```

use std::fmt;

use crate::core::paste::paste_lines;
use crate::data::constants::{MAX_COLS, MAX_SURFACE_ROWS};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the import will alter or drop some data
    Warning,
    /// Error - the text is not table data
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            source_text: None,
            suggestion: None,
        }
    }

    /// Add location information
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add source text
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        if let Some(line) = self.line {
            write!(f, "\n  --> line {}", line)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source.replace('\t', "\\t"))?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Check pasted spreadsheet text for issues
pub fn check_paste(input: &str) -> CheckResult {
    let mut result = CheckResult::new();

    if input.contains('\0') {
        result.add(
            Diagnostic::new(DiagnosticLevel::Error, "input contains NUL bytes")
                .with_suggestion("Paste text copied from a spreadsheet, not binary data"),
        );
        return result;
    }

    let lines = paste_lines(input);
    if lines.is_empty() {
        result.add(Diagnostic::new(
            DiagnosticLevel::Info,
            "nothing to import: input is empty",
        ));
        return result;
    }

    let widths: Vec<usize> = lines.iter().map(|l| l.split('\t').count()).collect();
    let max_cols = widths.iter().copied().max().unwrap_or(0);

    check_separator(&lines, &mut result);
    check_ragged_lines(&lines, &widths, max_cols, &mut result);
    check_limits(lines.len(), max_cols, &mut result);
    check_markup(&lines, &mut result);

    result
}

/// Comma-separated lines without a single tab were probably copied from a CSV file
fn check_separator(lines: &[String], result: &mut CheckResult) {
    let has_tab = lines.iter().any(|l| l.contains('\t'));
    let comma_lines = lines.iter().filter(|l| l.contains(',')).count();

    if !has_tab && comma_lines > 0 && comma_lines == lines.len() {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                "no tab separators found but every line contains commas",
            )
            .with_line(1)
            .with_source(lines[0].clone())
            .with_suggestion("Import the text as CSV instead (--format csv)"),
        );
    }
}

fn check_ragged_lines(
    lines: &[String],
    widths: &[usize],
    max_cols: usize,
    result: &mut CheckResult,
) {
    for (idx, (line, &width)) in lines.iter().zip(widths).enumerate() {
        if width < max_cols {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    format!(
                        "line has {} cell{}; padded to {} with empty cells",
                        width,
                        if width == 1 { "" } else { "s" },
                        max_cols
                    ),
                )
                .with_line(idx + 1)
                .with_source(line.clone()),
            );
        }
    }
}

fn check_limits(rows: usize, cols: usize, result: &mut CheckResult) {
    if rows > MAX_SURFACE_ROWS {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                format!(
                    "{} rows exceed the {}-row limit; {} will be dropped",
                    rows,
                    MAX_SURFACE_ROWS,
                    rows - MAX_SURFACE_ROWS
                ),
            )
            .with_line(MAX_SURFACE_ROWS + 1)
            .with_suggestion("Split the data into several tables"),
        );
    }

    if cols > MAX_COLS {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                format!(
                    "{} columns exceed the {}-column limit; {} will be dropped",
                    cols,
                    MAX_COLS,
                    cols - MAX_COLS
                ),
            )
            .with_suggestion("Remove unused columns before copying"),
        );
    }
}

fn check_markup(lines: &[String], result: &mut CheckResult) {
    let first = lines
        .iter()
        .position(|l| l.contains(['<', '>', '&', '"', '\'']));

    if let Some(idx) = first {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Info,
                "cell text contains markup characters; they will be escaped",
            )
            .with_line(idx + 1)
            .with_source(lines[idx].clone()),
        );
    }
}

/// Format check results for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_paste() {
        let result = check_paste("a\tb\nc\td\n");
        assert!(result.is_empty(), "{:?}", result.diagnostics);
        assert_eq!(result.summary(), "no issues found");
    }

    #[test]
    fn test_empty_paste() {
        let result = check_paste("  \n\t\n");
        assert_eq!(result.infos, 1);
        assert!(!result.has_errors());
    }

    #[test]
    fn test_ragged_lines_reported_with_line_numbers() {
        let result = check_paste("a\tb\tc\nd\ne\tf\tg");
        assert_eq!(result.warnings, 1);
        assert_eq!(result.diagnostics[0].line, Some(2));
        assert!(result.diagnostics[0].message.contains("padded to 3"));
    }

    #[test]
    fn test_csv_looking_paste() {
        let result = check_paste("name,age\nAda,36");
        assert_eq!(result.warnings, 1);
        assert!(result.diagnostics[0]
            .suggestion
            .as_deref()
            .unwrap_or("")
            .contains("CSV"));
    }

    #[test]
    fn test_single_column_without_commas_is_fine() {
        let result = check_paste("one\ntwo\nthree");
        assert!(result.is_empty());
    }

    #[test]
    fn test_row_limit() {
        let text = vec!["x"; 60].join("\n");
        let result = check_paste(&text);
        assert_eq!(result.warnings, 1);
        assert!(result.diagnostics[0].message.contains("9 will be dropped"));
    }

    #[test]
    fn test_column_limit() {
        let text = vec!["x"; 25].join("\t");
        let result = check_paste(&text);
        assert_eq!(result.warnings, 1);
        assert!(result.diagnostics[0].message.contains("25 columns"));
    }

    #[test]
    fn test_markup_note() {
        let result = check_paste("<b>bold</b>\tplain");
        assert_eq!(result.infos, 1);
        assert_eq!(result.diagnostics[0].line, Some(1));
    }

    #[test]
    fn test_nul_is_error() {
        let result = check_paste("a\0b");
        assert!(result.has_errors());
    }

    #[test]
    fn test_summary_format() {
        let mut result = CheckResult::new();
        result.add(Diagnostic::new(DiagnosticLevel::Error, "test"));
        result.add(Diagnostic::new(DiagnosticLevel::Warning, "test"));

        let summary = result.summary();
        assert!(summary.contains("1 error"));
        assert!(summary.contains("1 warning"));
    }

    #[test]
    fn test_format_without_color() {
        let result = check_paste("a\tb\nc");
        let text = format_diagnostics(&result, false);
        assert!(text.contains("warning: line has 1 cell; padded to 2"));
        assert!(text.contains("--> line 2"));
        assert!(text.ends_with("Summary: 1 warning"));
        assert!(!text.contains("\x1b["));
    }
}
