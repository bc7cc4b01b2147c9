//! Planner session.
//!
//! One explicit state struct holding mode, picker and settings, with
//! command methods that return events. There is no apply step: candidates
//! are a pure projection, re-derived from the current state on every read.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::clock::{TimeFormat, TimeOfDay};
use crate::events::Event;
use crate::picker::{Column, PickerState, StepDirection};
use crate::plan::{compute_candidates, Candidate, Mode, PlanSettings, CYCLE_SEQUENCE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planner {
    mode: Mode,
    picker: PickerState,
    #[serde(default)]
    settings: PlanSettings,
    #[serde(default)]
    selected: Option<usize>,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            mode: Mode::WakeAt,
            picker: PickerState::default(),
            settings: PlanSettings::default(),
            selected: None,
        }
    }
}

impl Planner {
    pub fn new(mode: Mode, picker: PickerState, settings: PlanSettings) -> Self {
        Self {
            mode,
            picker,
            settings,
            selected: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn settings(&self) -> &PlanSettings {
        &self.settings
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The picker time is the anchor in both modes.
    pub fn anchor(&self) -> TimeOfDay {
        self.picker.time()
    }

    /// Re-derive the candidate list from current state.
    pub fn candidates(&self) -> Vec<Candidate> {
        compute_candidates(self.anchor(), self.mode, &self.settings)
    }

    /// Full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::PlanSnapshot {
            mode: self.mode,
            anchor: self.anchor(),
            format: self.picker.format(),
            settings: self.settings,
            selected: self.selected,
            candidates: self.candidates(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Switch modes. `BedNow` anchors on the supplied current time; the
    /// caller owns the clock. Any selection is stale after a switch.
    pub fn set_mode(&mut self, mode: Mode, now: TimeOfDay) -> Event {
        self.mode = mode;
        if mode == Mode::BedNow {
            self.picker.set_time(now);
        }
        self.selected = None;
        Event::ModeChanged {
            mode,
            anchor: self.anchor(),
            at: Utc::now(),
        }
    }

    /// Apply one gated step to a picker column. Returns `None` when the
    /// step was a no-op (inert period column); otherwise the anchor moved
    /// and the candidate list is already stale.
    pub fn step(&mut self, column: Column, direction: StepDirection) -> Option<Event> {
        if !self.picker.step(column, direction) {
            return None;
        }
        self.selected = None;
        Some(Event::AnchorChanged {
            anchor: self.anchor(),
            at: Utc::now(),
        })
    }

    pub fn set_time(&mut self, time: TimeOfDay) -> Event {
        self.picker.set_time(time);
        self.selected = None;
        Event::AnchorChanged {
            anchor: time,
            at: Utc::now(),
        }
    }

    pub fn set_format(&mut self, format: TimeFormat) -> Event {
        self.picker.set_format(format);
        Event::FormatChanged {
            format,
            at: Utc::now(),
        }
    }

    pub fn set_latency(&mut self, latency_min: u16) -> Event {
        self.update_settings(|s| s.latency_min = latency_min)
    }

    pub fn set_cycle_len(&mut self, cycle_len_min: u16) -> Event {
        self.update_settings(|s| s.cycle_len_min = cycle_len_min)
    }

    pub fn set_wake_window(&mut self, wake_window_min: u16) -> Event {
        self.update_settings(|s| s.wake_window_min = wake_window_min)
    }

    pub fn set_settings(&mut self, settings: PlanSettings) -> Event {
        self.update_settings(|s| *s = settings)
    }

    /// Select one result by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<Event> {
        if index >= CYCLE_SEQUENCE.len() {
            return None;
        }
        self.selected = Some(index);
        Some(Event::ResultSelected {
            index,
            at: Utc::now(),
        })
    }

    fn update_settings(&mut self, apply: impl FnOnce(&mut PlanSettings)) -> Event {
        apply(&mut self.settings);
        self.settings.clamp();
        Event::SettingsChanged {
            settings: self.settings,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_anchor_and_recomputes() {
        let mut planner = Planner::default(); // 07:00 AM, WakeAt
        let before = planner.candidates();
        let ev = planner.step(Column::Minute, StepDirection::Down);
        assert!(matches!(ev, Some(Event::AnchorChanged { .. })));
        let after = planner.candidates();
        assert_ne!(before, after);
        // Each candidate shifted by exactly the one anchor minute.
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(b.time.add_minutes(1), a.time);
        }
    }

    #[test]
    fn inert_step_produces_no_event() {
        let mut planner = Planner::default();
        planner.set_format(TimeFormat::H24);
        assert!(planner.step(Column::Period, StepDirection::Down).is_none());
    }

    #[test]
    fn bed_now_seeds_picker_from_supplied_clock() {
        let mut planner = Planner::default();
        let now = TimeOfDay::from_hm(23, 42);
        planner.set_mode(Mode::BedNow, now);
        assert_eq!(planner.anchor(), now);
        // Candidates now run forward from the anchor.
        let first = &planner.candidates()[0];
        assert_eq!(
            first.time,
            now.add_minutes(first.time_in_bed_min as i32)
        );
    }

    #[test]
    fn mode_switch_clears_selection() {
        let mut planner = Planner::default();
        planner.select(1).unwrap();
        assert_eq!(planner.selected(), Some(1));
        planner.set_mode(Mode::BedNow, TimeOfDay::from_hm(22, 0));
        assert_eq!(planner.selected(), None);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut planner = Planner::default();
        assert!(planner.select(4).is_none());
        assert_eq!(planner.selected(), None);
    }

    #[test]
    fn settings_mutations_clamp() {
        let mut planner = Planner::default();
        planner.set_latency(500);
        assert_eq!(planner.settings().latency_min, 60);
        planner.set_cycle_len(10);
        assert_eq!(planner.settings().cycle_len_min, 80);
    }

    #[test]
    fn session_round_trips_through_json() {
        let mut planner = Planner::default();
        planner.set_mode(Mode::BedNow, TimeOfDay::from_hm(22, 15));
        planner.set_latency(20);
        planner.select(2);
        let json = serde_json::to_string(&planner).unwrap();
        let restored: Planner = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.anchor(), planner.anchor());
        assert_eq!(restored.selected(), Some(2));
        assert_eq!(restored.candidates(), planner.candidates());
    }
}
