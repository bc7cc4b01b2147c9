//! Sleep plan calculator.
//!
//! Given an anchor time and a mode, produce one candidate per cycle count in
//! a fixed ascending sequence. Candidates are immutable and recomputed in
//! full on every input change -- there is no incremental update path.

use serde::{Deserialize, Serialize};

use crate::clock::{format_duration_min, TimeOfDay};

/// Cycle counts evaluated for every plan, ascending.
pub const CYCLE_SEQUENCE: [u32; 4] = [4, 5, 6, 7];

/// The two "sweet spot" cycle counts. A fixed policy choice, not derived.
const RECOMMENDED_CYCLES: [u32; 2] = [5, 6];

/// How many recommended candidates get the `best` mark.
const BEST_COUNT: usize = 2;

/// Which end of the sleep interval the anchor pins down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Anchor is the wake time; candidates are bed times.
    #[serde(rename = "wake")]
    WakeAt,
    /// Anchor is "now"; candidates are wake times.
    #[serde(rename = "bed")]
    BedNow,
}

/// Tunable plan inputs. Construction clamps everything into range, so a
/// value pulled from storage or a share link can never be out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSettings {
    /// Minutes between getting into bed and falling asleep (0-60).
    pub latency_min: u16,
    /// One sleep cycle in minutes (80-110).
    pub cycle_len_min: u16,
    /// Tolerance band after the computed time in minutes (0-30).
    pub wake_window_min: u16,
}

pub const LATENCY_RANGE: std::ops::RangeInclusive<u16> = 0..=60;
pub const CYCLE_LEN_RANGE: std::ops::RangeInclusive<u16> = 80..=110;
pub const WAKE_WINDOW_RANGE: std::ops::RangeInclusive<u16> = 0..=30;

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            latency_min: 15,
            cycle_len_min: 90,
            wake_window_min: 15,
        }
    }
}

impl PlanSettings {
    pub fn new(latency_min: u16, cycle_len_min: u16, wake_window_min: u16) -> Self {
        Self {
            latency_min: clamp_to(latency_min, LATENCY_RANGE),
            cycle_len_min: clamp_to(cycle_len_min, CYCLE_LEN_RANGE),
            wake_window_min: clamp_to(wake_window_min, WAKE_WINDOW_RANGE),
        }
    }

    /// Re-clamp in place. Used after untyped mutation (config set, load).
    pub fn clamp(&mut self) {
        *self = Self::new(self.latency_min, self.cycle_len_min, self.wake_window_min);
    }
}

fn clamp_to(v: u16, range: std::ops::RangeInclusive<u16>) -> u16 {
    v.clamp(*range.start(), *range.end())
}

/// One computed sleep option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Primary displayed time: bed time in `WakeAt`, wake time in `BedNow`.
    pub time: TimeOfDay,
    pub cycles: u32,
    pub window_start: TimeOfDay,
    pub window_end: TimeOfDay,
    /// Latency plus full cycles, in minutes. May exceed a day.
    pub time_in_bed_min: u32,
    pub recommended: bool,
    pub best: bool,
}

impl Candidate {
    /// `"Xh Ym"` rendering of time in bed.
    pub fn time_in_bed(&self) -> String {
        format_duration_min(self.time_in_bed_min)
    }

    /// Window is only meaningful when a non-zero wake window is configured.
    pub fn window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        (self.window_start != self.window_end).then_some((self.window_start, self.window_end))
    }
}

/// Compute the full candidate list for an anchor.
///
/// Output order is ascending cycle count; that is also display order. The
/// `best` marks go to the first [`BEST_COUNT`] recommended candidates in
/// that order, i.e. the lowest recommended cycle counts.
pub fn compute_candidates(anchor: TimeOfDay, mode: Mode, settings: &PlanSettings) -> Vec<Candidate> {
    let mut best_left = BEST_COUNT;
    CYCLE_SEQUENCE
        .iter()
        .map(|&cycles| {
            let time_in_bed_min =
                settings.latency_min as u32 + cycles * settings.cycle_len_min as u32;
            let time = match mode {
                Mode::WakeAt => anchor.add_minutes(-(time_in_bed_min as i32)),
                Mode::BedNow => anchor.add_minutes(time_in_bed_min as i32),
            };
            let recommended = RECOMMENDED_CYCLES.contains(&cycles);
            let best = recommended && best_left > 0;
            if best {
                best_left -= 1;
            }
            Candidate {
                time,
                cycles,
                window_start: time,
                window_end: time.add_minutes(settings.wake_window_min as i32),
                time_in_bed_min,
                recommended,
                best,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings(latency: u16, cycle: u16, window: u16) -> PlanSettings {
        PlanSettings::new(latency, cycle, window)
    }

    #[test]
    fn wake_at_seven_scenario() {
        let anchor = TimeOfDay::from_hm(7, 0);
        let out = compute_candidates(anchor, Mode::WakeAt, &settings(15, 90, 15));
        assert_eq!(out.len(), 4);

        let times: Vec<String> = out.iter().map(|c| c.time.to_string()).collect();
        assert_eq!(times, ["00:45", "23:15", "21:45", "20:15"]);

        assert_eq!(out[1].time_in_bed_min, 465);
        assert_eq!(out[1].time_in_bed(), "7h 45m");

        // Sweet spot is 5 and 6 cycles; both carry the best mark.
        let best: Vec<u32> = out.iter().filter(|c| c.best).map(|c| c.cycles).collect();
        assert_eq!(best, [5, 6]);
        let rec: Vec<u32> = out
            .iter()
            .filter(|c| c.recommended)
            .map(|c| c.cycles)
            .collect();
        assert_eq!(rec, [5, 6]);
    }

    #[test]
    fn bed_now_adds_instead_of_subtracting() {
        let anchor = TimeOfDay::from_hm(23, 0);
        let out = compute_candidates(anchor, Mode::BedNow, &settings(15, 90, 0));
        // 23:00 + 375 = 05:15 next day.
        assert_eq!(out[0].time, TimeOfDay::from_hm(5, 15));
        // 23:00 + 645 = 09:45 next day.
        assert_eq!(out[3].time, TimeOfDay::from_hm(9, 45));
    }

    #[test]
    fn window_spans_wake_window_and_hides_when_zero() {
        let anchor = TimeOfDay::from_hm(7, 0);
        let out = compute_candidates(anchor, Mode::WakeAt, &settings(15, 90, 15));
        assert_eq!(out[0].window_start, out[0].time);
        assert_eq!(out[0].window_end, out[0].time.add_minutes(15));
        assert!(out[0].window().is_some());

        let out = compute_candidates(anchor, Mode::WakeAt, &settings(15, 90, 0));
        assert!(out[0].window().is_none());
    }

    #[test]
    fn time_in_bed_past_a_day_still_lands_in_range() {
        // Max settings near midnight: every intermediate sum crosses the
        // day boundary.
        let anchor = TimeOfDay::from_hm(23, 50);
        let out = compute_candidates(anchor, Mode::BedNow, &settings(60, 110, 30));
        for c in &out {
            assert!(c.time.minutes() < 1440);
            assert!(c.window_end.minutes() < 1440);
        }
    }

    #[test]
    fn settings_clamp_to_range() {
        let s = PlanSettings::new(999, 10, 999);
        assert_eq!(s.latency_min, 60);
        assert_eq!(s.cycle_len_min, 80);
        assert_eq!(s.wake_window_min, 30);
    }

    #[test]
    fn output_order_is_ascending_cycles_not_time() {
        let anchor = TimeOfDay::from_hm(2, 0);
        let out = compute_candidates(anchor, Mode::WakeAt, &settings(15, 90, 0));
        let cycles: Vec<u32> = out.iter().map(|c| c.cycles).collect();
        assert_eq!(cycles, CYCLE_SEQUENCE);
        // Bed times wrapped past midnight are not re-sorted.
        assert!(out[0].time > out[1].time);
    }

    proptest! {
        #[test]
        fn wake_at_anchor_recovers(
            anchor_min in 0i32..1440,
            latency in 0u16..=60,
            cycle in 80u16..=110,
        ) {
            let anchor = TimeOfDay::from_minutes(anchor_min);
            let out = compute_candidates(anchor, Mode::WakeAt, &settings(latency, cycle, 0));
            for c in &out {
                prop_assert_eq!(c.time.add_minutes(c.time_in_bed_min as i32), anchor);
            }
        }

        #[test]
        fn exactly_two_best_marks(
            anchor_min in 0i32..1440,
            latency in 0u16..=60,
            cycle in 80u16..=110,
            window in 0u16..=30,
        ) {
            let anchor = TimeOfDay::from_minutes(anchor_min);
            let out = compute_candidates(anchor, Mode::BedNow, &settings(latency, cycle, window));
            let rec = out.iter().filter(|c| c.recommended).count();
            let best = out.iter().filter(|c| c.best).count();
            prop_assert_eq!(best, if rec >= 2 { 2 } else { rec });
            prop_assert!(out.iter().all(|c| !c.best || c.recommended));
        }
    }
}
