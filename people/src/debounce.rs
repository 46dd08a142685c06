//! Debounce bookkeeping for filter edits.
//!
//! The timer itself belongs to the UI layer; this type decides which timer
//! firing is allowed to commit. Every [`Debounce::push`] issues a new
//! [`Ticket`], and only the newest ticket can take the pending value, so a
//! burst of keystrokes collapses into a single commit.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Delay between the last filter edit and the request it triggers.
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

/// Handle returned by [`Debounce::push`] and redeemed by [`Debounce::take`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct Debounce<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl<T> Debounce<T> {
    #[must_use]
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: None,
        }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Record `value` as the latest pending edit, superseding any earlier one.
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Take the pending value if `ticket` is still the newest.
    pub fn take(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value and invalidate every outstanding ticket.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
