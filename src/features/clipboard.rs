//! Clipboard collaborator and copy acknowledgment
//!
//! The core only hands the rendered string to a [`Clipboard`]; how the host
//! writes it (async clipboard API, selection + legacy copy command) is up to
//! the implementation.

use std::time::Duration;

use tracing::warn;

use crate::data::constants::COPY_FEEDBACK_LABEL;
use crate::utils::error::ClipboardError;

/// Host clipboard access
pub trait Clipboard {
    /// Preferred write path
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Legacy path tried when [`Clipboard::write_text`] fails
    fn fallback_copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

/// Which path delivered the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    Failed(ClipboardError),
}

/// Write `text` through the primary path, then the fallback
pub fn copy_with_fallback<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> CopyOutcome {
    match clipboard.write_text(text) {
        Ok(()) => CopyOutcome::Primary,
        Err(primary) => {
            warn!(error = %primary, "clipboard write failed, trying fallback");
            match clipboard.fallback_copy(text) {
                Ok(()) => CopyOutcome::Fallback,
                Err(err) => {
                    warn!(error = %err, "clipboard fallback failed");
                    CopyOutcome::Failed(err)
                }
            }
        }
    }
}

/// In-memory clipboard for tests and headless hosts
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// Make the primary path fail with this error
    pub deny_primary: Option<ClipboardError>,
    /// Accept text through the fallback path
    pub allow_fallback: bool,
    pub fallback_used: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose primary path is denied but whose fallback works
    pub fn fallback_only() -> Self {
        MemoryClipboard {
            deny_primary: Some(ClipboardError::Denied("insecure context".to_string())),
            allow_fallback: true,
            ..Self::default()
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.deny_primary.clone() {
            return Err(err);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn fallback_copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.allow_fallback {
            return Err(ClipboardError::Unsupported);
        }
        self.fallback_used = true;
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Visual "Copied!" acknowledgment shown for a fixed window
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    window: Duration,
    visible_until: Option<Duration>,
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        CopyFeedback {
            window,
            visible_until: None,
        }
    }

    /// Show the acknowledgment starting at `now`; a new copy restarts the window
    pub fn acknowledge(&mut self, now: Duration) {
        self.visible_until = Some(now + self.window);
    }

    pub fn is_visible(&self, now: Duration) -> bool {
        self.visible_until.is_some_and(|until| now < until)
    }

    /// Label to display at `now`, if any
    pub fn label(&self, now: Duration) -> Option<&'static str> {
        self.is_visible(now).then_some(COPY_FEEDBACK_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_copy() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(copy_with_fallback(&mut clipboard, "<div>"), CopyOutcome::Primary);
        assert_eq!(clipboard.contents.as_deref(), Some("<div>"));
        assert!(!clipboard.fallback_used);
    }

    #[test]
    fn test_fallback_copy() {
        let mut clipboard = MemoryClipboard::fallback_only();
        assert_eq!(copy_with_fallback(&mut clipboard, "x"), CopyOutcome::Fallback);
        assert!(clipboard.fallback_used);
        assert_eq!(clipboard.contents.as_deref(), Some("x"));
    }

    #[test]
    fn test_both_paths_fail() {
        let mut clipboard = MemoryClipboard {
            deny_primary: Some(ClipboardError::Unsupported),
            ..MemoryClipboard::default()
        };
        assert_eq!(
            copy_with_fallback(&mut clipboard, "x"),
            CopyOutcome::Failed(ClipboardError::Unsupported)
        );
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_feedback_window() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));
        assert_eq!(feedback.label(Duration::ZERO), None);

        feedback.acknowledge(Duration::from_millis(100));
        assert_eq!(feedback.label(Duration::from_millis(100)), Some("Copied!"));
        assert_eq!(feedback.label(Duration::from_millis(2099)), Some("Copied!"));
        assert_eq!(feedback.label(Duration::from_millis(2100)), None);
    }

    #[test]
    fn test_feedback_restarts() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));
        feedback.acknowledge(Duration::from_millis(0));
        feedback.acknowledge(Duration::from_millis(1500));
        assert!(feedback.is_visible(Duration::from_millis(3000)));
    }
}
