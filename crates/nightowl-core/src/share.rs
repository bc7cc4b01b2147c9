//! Share-link encoding and decoding.
//!
//! One canonical query-parameter schema: `mode`, `hour`, `minute`,
//! `period`, `latency`, `cycleLength` and optional `selectedResult`. The
//! picker time travels as its 12-hour display triple so links read
//! naturally. Decoding never fails on content: unknown keys are ignored,
//! malformed numbers fall back to defaults and out-of-range values are
//! clamped silently. Only a string that is not a URL at all is an error.

use url::Url;

use crate::clock::{hour12_to_24, hour24_to_12, Period, TimeOfDay};
use crate::error::ShareError;
use crate::plan::{Mode, PlanSettings, CYCLE_SEQUENCE};
use crate::planner::Planner;
use crate::storage::Preferences;

/// The flat share-link payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareLink {
    pub mode: Mode,
    /// 12-hour display hour, 1-12.
    pub hour: u8,
    pub minute: u8,
    pub period: Period,
    pub latency: u16,
    pub cycle_length: u16,
    pub selected: Option<usize>,
}

impl Default for ShareLink {
    fn default() -> Self {
        let defaults = PlanSettings::default();
        Self {
            mode: Mode::WakeAt,
            hour: 7,
            minute: 0,
            period: Period::Am,
            latency: defaults.latency_min,
            cycle_length: defaults.cycle_len_min,
            selected: None,
        }
    }
}

impl ShareLink {
    /// Capture the current planner state (plus selection) as a link payload.
    pub fn from_planner(planner: &Planner) -> Self {
        let anchor = planner.anchor();
        let (hour, period) = hour24_to_12(anchor.hour());
        Self {
            mode: planner.mode(),
            hour,
            minute: anchor.minute(),
            period,
            latency: planner.settings().latency_min,
            cycle_length: planner.settings().cycle_len_min,
            selected: planner.selected(),
        }
    }

    /// The anchor time the link encodes.
    pub fn anchor(&self) -> TimeOfDay {
        TimeOfDay::from_hm(hour12_to_24(self.hour, self.period), self.minute)
    }

    pub fn plan_settings(&self) -> PlanSettings {
        // Wake window is a local preference and does not travel in links.
        PlanSettings::new(self.latency, self.cycle_length, PlanSettings::default().wake_window_min)
    }

    /// Apply the link to a planner session and the stored preferences.
    pub fn apply(&self, planner: &mut Planner, prefs: &mut Preferences) {
        planner.set_mode(self.mode, self.anchor());
        planner.set_time(self.anchor());
        planner.set_latency(self.latency);
        planner.set_cycle_len(self.cycle_length);
        if let Some(index) = self.selected {
            planner.select(index);
        }
        prefs.latency = self.latency;
        prefs.cycle_length = self.cycle_length;
        prefs.clamp();
    }

    /// Render the query string, stable key order.
    pub fn to_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("mode", mode_str(self.mode))
            .append_pair("hour", &self.hour.to_string())
            .append_pair("minute", &self.minute.to_string())
            .append_pair("period", &self.period.to_string())
            .append_pair("latency", &self.latency.to_string())
            .append_pair("cycleLength", &self.cycle_length.to_string());
        if let Some(index) = self.selected {
            query.append_pair("selectedResult", &index.to_string());
        }
        query.finish()
    }

    /// Attach the payload to a base URL.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(Some(&self.to_query()));
        url
    }

    /// Decode a link. Content-level problems degrade instead of failing.
    pub fn parse(link: &str) -> Result<Self, ShareError> {
        let url = Url::parse(link)?;
        let mut out = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "mode" => {
                    if let Some(mode) = parse_mode(&value) {
                        out.mode = mode;
                    }
                }
                "hour" => out.hour = parse_clamped(&value, out.hour, 1, 12),
                "minute" => out.minute = parse_clamped(&value, out.minute, 0, 59),
                "period" => {
                    match value.as_ref() {
                        "AM" => out.period = Period::Am,
                        "PM" => out.period = Period::Pm,
                        _ => {}
                    };
                }
                "latency" => out.latency = parse_clamped(&value, out.latency, 0, 60),
                "cycleLength" => out.cycle_length = parse_clamped(&value, out.cycle_length, 80, 110),
                "selectedResult" => {
                    out.selected = value
                        .parse::<usize>()
                        .ok()
                        .filter(|&i| i < CYCLE_SEQUENCE.len());
                }
                _ => {} // Unknown keys are ignored.
            }
        }
        Ok(out)
    }
}

fn mode_str(mode: Mode) -> &'static str {
    match mode {
        Mode::WakeAt => "wake",
        Mode::BedNow => "bed",
    }
}

fn parse_mode(s: &str) -> Option<Mode> {
    match s {
        "wake" => Some(Mode::WakeAt),
        "bed" => Some(Mode::BedNow),
        _ => None,
    }
}

fn parse_clamped<T>(s: &str, fallback: T, lo: T, hi: T) -> T
where
    T: std::str::FromStr + Ord + Copy,
{
    s.parse::<T>().map(|v| v.clamp(lo, hi)).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TimeFormat;
    use crate::picker::PickerState;

    fn base() -> Url {
        Url::parse("https://nightowl.example/").unwrap()
    }

    #[test]
    fn encodes_canonical_schema() {
        let link = ShareLink {
            mode: Mode::WakeAt,
            hour: 7,
            minute: 30,
            period: Period::Am,
            latency: 15,
            cycle_length: 90,
            selected: Some(1),
        };
        assert_eq!(
            link.to_query(),
            "mode=wake&hour=7&minute=30&period=AM&latency=15&cycleLength=90&selectedResult=1"
        );
    }

    #[test]
    fn round_trips_through_url() {
        let link = ShareLink {
            mode: Mode::BedNow,
            hour: 11,
            minute: 59,
            period: Period::Pm,
            latency: 0,
            cycle_length: 110,
            selected: None,
        };
        let url = link.to_url(&base());
        assert_eq!(ShareLink::parse(url.as_str()).unwrap(), link);
    }

    #[test]
    fn from_planner_captures_anchor_as_display_triple() {
        let planner = Planner::new(
            Mode::WakeAt,
            PickerState::new(TimeOfDay::from_hm(14, 30), TimeFormat::H24),
            PlanSettings::default(),
        );
        let link = ShareLink::from_planner(&planner);
        assert_eq!((link.hour, link.minute, link.period), (2, 30, Period::Pm));
        assert_eq!(link.anchor(), TimeOfDay::from_hm(14, 30));
    }

    #[test]
    fn out_of_range_values_clamp() {
        let url = format!(
            "{}?mode=wake&hour=99&minute=99&latency=999&cycleLength=5",
            base()
        );
        let link = ShareLink::parse(&url).unwrap();
        assert_eq!(link.hour, 12);
        assert_eq!(link.minute, 59);
        assert_eq!(link.latency, 60);
        assert_eq!(link.cycle_length, 80);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let url = format!(
            "{}?mode=banana&hour=soon&period=noon&selectedResult=9&extra=1",
            base()
        );
        let link = ShareLink::parse(&url).unwrap();
        assert_eq!(link, ShareLink::default());
    }

    #[test]
    fn not_a_url_is_the_only_error() {
        assert!(ShareLink::parse("not a url").is_err());
        assert!(ShareLink::parse("https://nightowl.example/?").is_ok());
    }

    #[test]
    fn apply_updates_planner_and_prefs() {
        let url = format!(
            "{}?mode=wake&hour=6&minute=45&period=AM&latency=20&cycleLength=100&selectedResult=2",
            base()
        );
        let link = ShareLink::parse(&url).unwrap();
        let mut planner = Planner::default();
        let mut prefs = Preferences::default();
        link.apply(&mut planner, &mut prefs);

        assert_eq!(planner.anchor(), TimeOfDay::from_hm(6, 45));
        assert_eq!(planner.settings().latency_min, 20);
        assert_eq!(planner.settings().cycle_len_min, 100);
        assert_eq!(planner.selected(), Some(2));
        assert_eq!(prefs.latency, 20);
        assert_eq!(prefs.cycle_length, 100);
    }
}
