//! Trailing-edge debounce primitive
//!
//! An explicit, cancellable deferred execution: `schedule` arms (or
//! re-arms) the trailing edge at `now + delay`, replacing any pending
//! payload, and `fire_due` hands the payload back once the quiet period
//! has elapsed. Only the most recent payload ever fires for a given
//! window - earlier ones are overwritten, never executed.
//!
//! The debouncer is a passive deadline, not a timer thread: the owner
//! drives it from its event loop with the current clock reading. That
//! keeps cancellation-on-clear an explicit, testable transition.

/// Cancellable trailing-edge debouncer
#[derive(Debug)]
pub struct Debouncer<T> {
    delay_millis: u64,
    armed: Option<(u64, T)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period
    pub fn new(delay_millis: u64) -> Self {
        Debouncer {
            delay_millis,
            armed: None,
        }
    }

    /// The configured quiet period in milliseconds
    pub fn delay_millis(&self) -> u64 {
        self.delay_millis
    }

    /// Arm (or re-arm) the trailing edge at `now + delay`
    ///
    /// Replaces any pending payload: a burst of calls within the window
    /// executes only the last one, with a full quiet period after it.
    pub fn schedule(&mut self, now: u64, payload: T) {
        self.armed = Some((now + self.delay_millis, payload));
    }

    /// Disarm without firing; returns whether a payload was pending
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    /// True if a payload is waiting for its deadline
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// The pending deadline, if armed
    pub fn deadline(&self) -> Option<u64> {
        self.armed.as_ref().map(|(at, _)| *at)
    }

    /// Take the payload if its deadline has passed
    pub fn fire_due(&mut self, now: u64) -> Option<T> {
        match &self.armed {
            Some((deadline, _)) if now >= *deadline => {
                self.armed.take().map(|(_, payload)| payload)
            }
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
