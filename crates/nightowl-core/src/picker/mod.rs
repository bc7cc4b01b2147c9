//! Scrollable time-picker state machine.
//!
//! Three columns (hour, minute, period) driven by discrete step events.
//! Internally only the 24-hour clock is tracked; the AM/PM period is a
//! derived view in 12-hour mode, never stored. That makes the 12/24 format
//! switch lossless by construction.

pub mod gate;

use serde::{Deserialize, Serialize};

use crate::clock::{hour12_to_24, hour24_to_12, Period, TimeFormat, TimeOfDay};

pub use gate::{GesturePolicy, RawInput, StepPolicy};

/// Picker column a step event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Hour,
    Minute,
    Period,
}

/// Direction of one discrete step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    fn delta(self) -> i32 {
        match self {
            StepDirection::Up => -1,
            StepDirection::Down => 1,
        }
    }
}

/// Current picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerState {
    hour24: u8,
    minute: u8,
    format: TimeFormat,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            hour24: 7,
            minute: 0,
            format: TimeFormat::H12,
        }
    }
}

impl PickerState {
    pub fn new(time: TimeOfDay, format: TimeFormat) -> Self {
        Self {
            hour24: time.hour(),
            minute: time.minute(),
            format,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn time(&self) -> TimeOfDay {
        TimeOfDay::from_hm(self.hour24, self.minute)
    }

    pub fn format(&self) -> TimeFormat {
        self.format
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour as displayed: 1-12 in 12-hour mode, 0-23 in 24-hour mode.
    pub fn display_hour(&self) -> u8 {
        match self.format {
            TimeFormat::H12 => hour24_to_12(self.hour24).0,
            TimeFormat::H24 => self.hour24,
        }
    }

    /// Derived period; only shown in 12-hour mode.
    pub fn period(&self) -> Option<Period> {
        match self.format {
            TimeFormat::H12 => Some(hour24_to_12(self.hour24).1),
            TimeFormat::H24 => None,
        }
    }

    /// Rendered `HH:MM` / `HH:MM AM` per the current format.
    pub fn display(&self) -> String {
        self.time().format(self.format)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Apply one step to one column. Returns false when the event is a
    /// no-op (period column in 24-hour mode, or an absolute period step
    /// that already holds).
    pub fn step(&mut self, column: Column, direction: StepDirection) -> bool {
        match column {
            Column::Hour => {
                match self.format {
                    TimeFormat::H12 => {
                        // Wrap 1-12 within the current half of the day.
                        let (h12, period) = hour24_to_12(self.hour24);
                        let next = ((h12 as i32 - 1 + direction.delta()).rem_euclid(12) + 1) as u8;
                        self.hour24 = hour12_to_24(next, period);
                    }
                    TimeFormat::H24 => {
                        self.hour24 = (self.hour24 as i32 + direction.delta()).rem_euclid(24) as u8;
                    }
                }
                true
            }
            Column::Minute => {
                self.minute = (self.minute as i32 + direction.delta()).rem_euclid(60) as u8;
                true
            }
            Column::Period => {
                // Deliberate quirk carried from the widget: the period step
                // is absolute, not a toggle. Down lands on PM, up on AM.
                if self.format != TimeFormat::H12 {
                    return false;
                }
                let (h12, current) = hour24_to_12(self.hour24);
                let target = match direction {
                    StepDirection::Down => Period::Pm,
                    StepDirection::Up => Period::Am,
                };
                if target == current {
                    return false;
                }
                self.hour24 = hour12_to_24(h12, target);
                true
            }
        }
    }

    /// Switch the display format. The held time never changes.
    pub fn set_format(&mut self, format: TimeFormat) {
        self.format = format;
    }

    /// Replace the held time outright (share import, "bed now" seeding).
    pub fn set_time(&mut self, time: TimeOfDay) {
        self.hour24 = time.hour();
        self.minute = time.minute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker(h: u8, m: u8, f: TimeFormat) -> PickerState {
        PickerState::new(TimeOfDay::from_hm(h, m), f)
    }

    #[test]
    fn hour_wraps_within_twelve_preserving_period() {
        let mut p = picker(13, 0, TimeFormat::H12); // 01 PM
        assert!(p.step(Column::Hour, StepDirection::Up));
        assert_eq!(p.display(), "12:00 PM");
        assert!(p.step(Column::Hour, StepDirection::Down));
        assert_eq!(p.display(), "01:00 PM");

        // 12 AM steps down to 01 AM, never crosses into PM.
        let mut p = picker(0, 0, TimeFormat::H12);
        p.step(Column::Hour, StepDirection::Down);
        assert_eq!(p.display(), "01:00 AM");
    }

    #[test]
    fn hour_wraps_mod_24_in_24h_mode() {
        let mut p = picker(0, 0, TimeFormat::H24);
        p.step(Column::Hour, StepDirection::Up);
        assert_eq!(p.display_hour(), 23);
        p.step(Column::Hour, StepDirection::Down);
        assert_eq!(p.display_hour(), 0);
    }

    #[test]
    fn minute_wraps_mod_60() {
        let mut p = picker(7, 0, TimeFormat::H12);
        p.step(Column::Minute, StepDirection::Up);
        assert_eq!(p.minute(), 59);
        p.step(Column::Minute, StepDirection::Down);
        assert_eq!(p.minute(), 0);
    }

    #[test]
    fn period_step_is_absolute_not_a_toggle() {
        let mut p = picker(9, 0, TimeFormat::H12); // 09:00 AM
        assert!(p.step(Column::Period, StepDirection::Down));
        assert_eq!(p.period(), Some(Period::Pm));
        // A second down step is a no-op, not a flip back.
        assert!(!p.step(Column::Period, StepDirection::Down));
        assert_eq!(p.period(), Some(Period::Pm));
        assert!(p.step(Column::Period, StepDirection::Up));
        assert_eq!(p.period(), Some(Period::Am));
    }

    #[test]
    fn period_column_inert_in_24h_mode() {
        let mut p = picker(9, 0, TimeFormat::H24);
        assert!(!p.step(Column::Period, StepDirection::Down));
        assert_eq!(p.display_hour(), 9);
        assert_eq!(p.period(), None);
    }

    #[test]
    fn format_switch_round_trips() {
        let mut p = picker(14, 30, TimeFormat::H24);
        assert_eq!(p.display(), "14:30");
        p.set_format(TimeFormat::H12);
        assert_eq!(p.display(), "02:30 PM");
        p.set_format(TimeFormat::H24);
        assert_eq!(p.display(), "14:30");
        assert_eq!(p.time(), TimeOfDay::from_hm(14, 30));
    }

    #[test]
    fn steps_keep_time_valid_under_churn() {
        let mut p = PickerState::default();
        for i in 0..500 {
            let col = [Column::Hour, Column::Minute, Column::Period][i % 3];
            let dir = if i % 2 == 0 { StepDirection::Down } else { StepDirection::Up };
            p.step(col, dir);
            assert!(p.time().minutes() < 1440);
        }
    }
}
