//! Feature modules - host-facing helpers
//!
//! - Debounced regeneration after cell edits
//! - Clipboard copy with a fallback path and a timed acknowledgment

pub mod clipboard;
pub mod debounce;

// Re-export commonly used types
pub use clipboard::{copy_with_fallback, Clipboard, CopyFeedback, CopyOutcome, MemoryClipboard};
pub use debounce::Debouncer;
