use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{TimeFormat, TimeOfDay};
use crate::plan::{Candidate, Mode, PlanSettings};

/// Every state change in the planner produces an Event.
/// The CLI prints them; a GUI shell would render from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ModeChanged {
        mode: Mode,
        anchor: TimeOfDay,
        at: DateTime<Utc>,
    },
    AnchorChanged {
        anchor: TimeOfDay,
        at: DateTime<Utc>,
    },
    FormatChanged {
        format: TimeFormat,
        at: DateTime<Utc>,
    },
    SettingsChanged {
        settings: PlanSettings,
        at: DateTime<Utc>,
    },
    ResultSelected {
        index: usize,
        at: DateTime<Utc>,
    },
    /// Full projection of the planner state plus the derived candidates.
    PlanSnapshot {
        mode: Mode,
        anchor: TimeOfDay,
        format: TimeFormat,
        settings: PlanSettings,
        selected: Option<usize>,
        candidates: Vec<Candidate>,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_externally_tagged_by_type() {
        let ev = Event::AnchorChanged {
            anchor: TimeOfDay::from_hm(7, 0),
            at: Utc::now(),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "AnchorChanged");
        assert_eq!(json["anchor"], 420);
    }

    #[test]
    fn mode_serializes_to_wire_names() {
        let ev = Event::ModeChanged {
            mode: Mode::BedNow,
            anchor: TimeOfDay::from_hm(23, 0),
            at: Utc::now(),
        };
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["mode"], "bed");
    }
}
