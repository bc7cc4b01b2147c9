//! Raw-input gating for the picker.
//!
//! Input channels deliver noisy high-frequency events; the contract is one
//! column change per intended gesture. The policy is a strategy the caller
//! injects, and raw events carry their own timestamps so filtering is
//! deterministic -- no internal clock reads.

use super::StepDirection;

/// One raw event from an input channel, before gating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// Scroll-wheel tick. Positive `delta_y` scrolls down.
    Wheel { delta_y: f64, at_ms: u64 },
    /// Touch-drag movement since the last event, in display units.
    /// Positive `dy` drags down, which scrolls the column up.
    Touch { dy: i32 },
    /// Arrow-key press.
    Key { direction: StepDirection },
}

/// Filters raw input into at most one step per intended gesture.
pub trait StepPolicy {
    fn filter(&mut self, raw: RawInput) -> Option<StepDirection>;

    /// Drop any partial gesture state (e.g. on touch end or focus loss).
    fn reset(&mut self);
}

/// Default gating policy.
///
/// Wheel ticks are throttled to one step per [`WHEEL_INTERVAL_MS`]; a burst
/// of [`VELOCITY_THRESHOLD`] suppressed ticks in the same direction counts
/// as a fresh deliberate gesture and bypasses the throttle. Touch deltas
/// accumulate until [`TOUCH_THRESHOLD`] units are crossed. Key presses are
/// already discrete and pass through.
#[derive(Debug, Clone, Default)]
pub struct GesturePolicy {
    last_wheel_ms: Option<u64>,
    suppressed: u32,
    suppressed_dir: Option<StepDirection>,
    touch_accum: i32,
}

/// Minimum gap between accepted wheel steps.
pub const WHEEL_INTERVAL_MS: u64 = 150;
/// Suppressed same-direction ticks that force a step through the throttle.
pub const VELOCITY_THRESHOLD: u32 = 4;
/// Touch drag distance that crosses into one step.
pub const TOUCH_THRESHOLD: i32 = 20;

impl GesturePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    fn accept_wheel(&mut self, direction: StepDirection, at_ms: u64) -> Option<StepDirection> {
        let throttled = self
            .last_wheel_ms
            .is_some_and(|last| at_ms.saturating_sub(last) < WHEEL_INTERVAL_MS);
        if !throttled {
            self.last_wheel_ms = Some(at_ms);
            self.suppressed = 0;
            self.suppressed_dir = None;
            return Some(direction);
        }

        // Count the burst; direction changes restart it.
        if self.suppressed_dir == Some(direction) {
            self.suppressed += 1;
        } else {
            self.suppressed_dir = Some(direction);
            self.suppressed = 1;
        }
        if self.suppressed >= VELOCITY_THRESHOLD {
            self.last_wheel_ms = Some(at_ms);
            self.suppressed = 0;
            self.suppressed_dir = None;
            return Some(direction);
        }
        None
    }

    fn accept_touch(&mut self, dy: i32) -> Option<StepDirection> {
        self.touch_accum += dy;
        if self.touch_accum.abs() < TOUCH_THRESHOLD {
            return None;
        }
        // Dragging down moves the column content down, i.e. steps up.
        let direction = if self.touch_accum > 0 {
            StepDirection::Up
        } else {
            StepDirection::Down
        };
        self.touch_accum = 0;
        Some(direction)
    }
}

impl StepPolicy for GesturePolicy {
    fn filter(&mut self, raw: RawInput) -> Option<StepDirection> {
        match raw {
            RawInput::Wheel { delta_y, at_ms } => {
                let direction = if delta_y > 0.0 {
                    StepDirection::Down
                } else {
                    StepDirection::Up
                };
                self.accept_wheel(direction, at_ms)
            }
            RawInput::Touch { dy } => self.accept_touch(dy),
            RawInput::Key { direction } => Some(direction),
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
