//! Output sinks: where regenerated HTML goes
//!
//! A host typically renders the string into a live preview and shows the
//! raw markup for copying. The core only calls [`OutputSink::deliver`].

/// Receives the rendered fragment on every regeneration
pub trait OutputSink {
    fn deliver(&mut self, html: &str);
}

/// Keeps the most recent delivery
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    pub last: Option<String>,
    pub deliveries: usize,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl OutputSink for CapturedOutput {
    fn deliver(&mut self, html: &str) {
        self.last = Some(html.to_string());
        self.deliveries += 1;
    }
}

/// Discards every delivery
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl OutputSink for NullOutput {
    fn deliver(&mut self, _html: &str) {}
}
