//! Error handling for Tablecraft
//!
//! The table pipeline itself never fails: empty input, ragged rows and
//! delete floors all resolve to no-ops or defaults. This module covers the
//! fallible edges around it (files, configuration, CSV input, clipboard)
//! and the non-fatal warnings an import can produce.

use std::fmt;

use crate::core::model::TableModel;

/// Error type for operations around the editor core
#[derive(Debug, Clone)]
pub enum EditorError {
    /// Input could not be read as table data
    InvalidInput {
        message: String,
        line: Option<usize>,
    },
    /// Configuration could not be parsed
    Config { message: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// Internal error
    InternalError { message: String },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::InvalidInput { message, line } => {
                if let Some(l) = line {
                    write!(f, "Invalid input at line {}: {}", l, message)
                } else {
                    write!(f, "Invalid input: {}", message)
                }
            }
            EditorError::Config { message } => write!(f, "Config error: {}", message),
            EditorError::IoError { message } => write!(f, "IO error: {}", message),
            EditorError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for EditorError {}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        EditorError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "data-loading")]
impl From<csv::Error> for EditorError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line() as usize);
        EditorError::InvalidInput {
            message: err.to_string(),
            line,
        }
    }
}

#[cfg(feature = "data-loading")]
impl From<toml::de::Error> for EditorError {
    fn from(err: toml::de::Error) -> Self {
        EditorError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for fallible editor operations
pub type EditorResult<T> = Result<T, EditorError>;

// Convenience constructors for errors
impl EditorError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EditorError::InvalidInput {
            message: message.into(),
            line: None,
        }
    }

    pub fn invalid_at(message: impl Into<String>, line: usize) -> Self {
        EditorError::InvalidInput {
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        EditorError::Config {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        EditorError::InternalError {
            message: message.into(),
        }
    }
}

/// Failure reported by a clipboard collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The host denied access (permissions, insecure context)
    Denied(String),
    /// The host has no such mechanism
    Unsupported,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Denied(reason) => write!(f, "Clipboard write denied: {}", reason),
            ClipboardError::Unsupported => write!(f, "Clipboard not supported"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Import warnings (non-fatal issues)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    pub message: String,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ImportWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    pub fn with_suggestion(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            suggestion: Some(suggestion.into()),
        }
    }

    /// Point the warning at a 1-indexed input line
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Result of an import: the model now on the surface plus any warnings
#[derive(Debug, Clone)]
pub struct ImportOutput {
    /// Snapshot of the surface after the import
    pub model: TableModel,
    /// Any warnings generated during the import
    pub warnings: Vec<ImportWarning>,
}

impl ImportOutput {
    pub fn new(model: TableModel) -> Self {
        Self {
            model,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(model: TableModel, warnings: Vec<ImportWarning>) -> Self {
        Self { model, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = EditorError::invalid("unterminated quote");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("unterminated quote"));
    }

    #[test]
    fn test_invalid_input_with_line() {
        let err = EditorError::invalid_at("unterminated quote", 4);
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.tsv");
        let err: EditorError = io.into();
        assert!(matches!(err, EditorError::IoError { .. }));
        assert!(err.to_string().contains("missing.tsv"));
    }

    #[test]
    fn test_warning_display() {
        let warning = ImportWarning::with_suggestion("3 rows dropped", "split the paste");
        assert_eq!(warning.to_string(), "Warning: 3 rows dropped (split the paste)");
    }

    #[test]
    fn test_import_output() {
        let output = ImportOutput::new(TableModel::empty());
        assert!(!output.has_warnings());

        let output = ImportOutput::with_warnings(
            TableModel::empty(),
            vec![ImportWarning::new("nothing to import")],
        );
        assert!(output.has_warnings());
    }
}
