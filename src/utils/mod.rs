//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for pasted input
//! - Error types and result types

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{check_paste, format_diagnostics, CheckResult, Diagnostic, DiagnosticLevel};
pub use error::{
    ClipboardError, EditorError, EditorResult, ImportOutput, ImportWarning,
};
