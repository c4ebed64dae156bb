//! Hold-to-repeat timing
//!
//! A press that is released quickly is a tap and performs one step. A press
//! that is held past `delay` performs a step, then one more every `interval`
//! until it is released or cancelled.
//!
//! The state machine owns no timers. The caller feeds it the current instant
//! through [`HoldRepeat::poll`] and sleeps until [`HoldRepeat::deadline`], so
//! cancelling is a plain state change and nothing can keep firing afterwards.

use std::time::{Duration, Instant};

/// Default time a press must be held before it starts repeating
pub const DEFAULT_HOLD_DELAY: Duration = Duration::from_millis(300);

/// Default time between repeated steps
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(150);

/// Where a press currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPhase {
    /// Nothing pressed
    Idle,
    /// Pressed, hold threshold not reached yet
    Pending {
        /// When the press started
        since: Instant,
    },
    /// Held; steps are being repeated
    Repeating {
        /// When the next step is due
        next_fire: Instant,
    },
}

/// What a release means to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Released before the hold threshold; perform a single step
    Tap,
    /// Released after repeating; nothing more to do
    EndHold,
    /// Nothing was pressed
    Ignored,
}

/// Tap/hold state machine for one button
#[derive(Debug, Clone)]
pub struct HoldRepeat {
    phase: RepeatPhase,
    delay: Duration,
    interval: Duration,
}

impl HoldRepeat {
    /// Create a state machine with custom timings
    ///
    /// A zero interval is raised to one millisecond.
    pub fn new(delay: Duration, interval: Duration) -> Self {
        Self {
            phase: RepeatPhase::Idle,
            delay,
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    pub fn phase(&self) -> RepeatPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == RepeatPhase::Idle
    }

    /// Start a press; ignored while a press is already active
    pub fn press(&mut self, now: Instant) {
        if self.is_idle() {
            self.phase = RepeatPhase::Pending { since: now };
        }
    }

    /// Number of steps due at `now`
    pub fn poll(&mut self, now: Instant) -> u32 {
        match self.phase {
            RepeatPhase::Idle => 0,
            RepeatPhase::Pending { since } => {
                let threshold = since + self.delay;
                if now < threshold {
                    return 0;
                }
                self.phase = RepeatPhase::Repeating {
                    next_fire: threshold + self.interval,
                };
                // The threshold step plus any intervals already missed
                1 + self.poll(now)
            }
            RepeatPhase::Repeating { next_fire } => {
                if now < next_fire {
                    return 0;
                }
                let missed = (now - next_fire).as_nanos() / self.interval.as_nanos();
                let fired = u32::try_from(missed + 1).unwrap_or(u32::MAX);
                let step = self.interval * fired;
                self.phase = RepeatPhase::Repeating {
                    next_fire: next_fire + step,
                };
                fired
            }
        }
    }

    /// End the press
    pub fn release(&mut self) -> Release {
        let outcome = match self.phase {
            RepeatPhase::Idle => Release::Ignored,
            RepeatPhase::Pending { .. } => Release::Tap,
            RepeatPhase::Repeating { .. } => Release::EndHold,
        };
        self.phase = RepeatPhase::Idle;
        outcome
    }

    /// Drop any press without a tap (pointer left the button, teardown)
    pub fn cancel(&mut self) {
        self.phase = RepeatPhase::Idle;
    }

    /// Next instant at which [`poll`](Self::poll) may return steps
    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            RepeatPhase::Idle => None,
            RepeatPhase::Pending { since } => Some(since + self.delay),
            RepeatPhase::Repeating { next_fire } => Some(next_fire),
        }
    }
}

impl Default for HoldRepeat {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_DELAY, DEFAULT_REPEAT_INTERVAL)
    }
}
