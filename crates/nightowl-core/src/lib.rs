//! # NightOwl Core Library
//!
//! Core logic for the NightOwl sleep-cycle planner. All operations are
//! available via a standalone CLI binary; any GUI shell is a thin layer
//! over this same library.
//!
//! ## Architecture
//!
//! - **Clock**: minute-of-day arithmetic with explicit wraparound and
//!   12/24-hour conversion
//! - **Plan**: the candidate calculator -- latency plus whole sleep cycles
//!   either side of an anchor time
//! - **Picker**: the scrollable time-picker state machine plus the
//!   raw-input gating policy
//! - **Planner**: one explicit session struct tying mode, picker and
//!   settings together; candidates are a pure projection of it
//! - **Storage**: JSON preferences blob and session document under
//!   `~/.config/nightowl`
//! - **Share**: the canonical share-link query codec
//!
//! ## Key Components
//!
//! - [`TimeOfDay`]: wrapped minute-of-day value
//! - [`compute_candidates`]: the plan calculator
//! - [`PickerState`]: picker state machine
//! - [`Planner`]: session state with event-returning commands
//! - [`Preferences`]: persisted settings blob

pub mod clock;
pub mod error;
pub mod events;
pub mod picker;
pub mod plan;
pub mod planner;
pub mod share;
pub mod storage;

pub use clock::{Period, TimeFormat, TimeOfDay};
pub use error::{CoreError, Result, ShareError, StorageError};
pub use events::Event;
pub use picker::{Column, GesturePolicy, PickerState, RawInput, StepDirection, StepPolicy};
pub use plan::{compute_candidates, Candidate, Mode, PlanSettings};
pub use planner::Planner;
pub use share::ShareLink;
pub use storage::{Preferences, SessionStore};
