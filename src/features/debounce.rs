//! Cancellable delayed task
//!
//! Coalesces bursts of edits into one regeneration pass. Scheduling a new
//! pass replaces the pending one, so only the most recent edit's pass can
//! ever run. Time is passed in by the caller as a `Duration` since any fixed
//! epoch, which keeps this usable under WASM where `Instant` is unavailable.
//!
//! Two ways to drive it:
//! - poll: call [`Debouncer::poll`] from a tick loop
//! - timer callbacks: schedule a host timer for [`Debouncer::delay`] and pass
//!   the generation back to [`Debouncer::fire`]; stale generations are
//!   rejected

use std::time::Duration;

use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingPass {
    generation: u64,
    due: Duration,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<PendingPass>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a pass `delay` after `now`, replacing any pending one
    ///
    /// Returns the generation that identifies this pass.
    pub fn schedule(&mut self, now: Duration) -> u64 {
        self.generation += 1;
        let due = now + self.delay;
        if let Some(prev) = self.pending {
            trace!(superseded = prev.generation, "debounce pass replaced");
        }
        self.pending = Some(PendingPass {
            generation: self.generation,
            due,
        });
        trace!(generation = self.generation, due_ms = due.as_millis() as u64, "debounce scheduled");
        self.generation
    }

    /// Drop the pending pass, if any
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending pass becomes due
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// True exactly once when the pending pass is due at `now`
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Host timer callback; true only for the current pass
    pub fn fire(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(p) if p.generation == generation => {
                self.pending = None;
                true
            }
            _ => {
                trace!(generation, "stale debounce pass skipped");
                false
            }
        }
    }
}
