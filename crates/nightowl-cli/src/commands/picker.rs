use chrono::{Local, Timelike};
use clap::{Subcommand, ValueEnum};
use nightowl_core::{Column, Mode, Planner, SessionStore, StepDirection, TimeOfDay};

use super::FormatArg;

#[derive(Subcommand)]
pub enum PickerAction {
    /// Print the current session snapshot as JSON
    Status,
    /// Set the picker time outright
    Set {
        /// Time as HH:MM (24-hour)
        time: String,
    },
    /// Step one picker column
    Step {
        /// Column to step
        #[arg(value_enum)]
        column: ColumnArg,
        /// Step direction
        #[arg(value_enum)]
        direction: DirectionArg,
    },
    /// Switch planning mode
    Mode {
        /// "wake" anchors on a wake time, "bed" on the current time
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Switch display format
    Format {
        /// 12 or 24
        #[arg(value_enum)]
        format: FormatArg,
    },
    /// Select one result by index
    Select { index: usize },
    /// Reset the session to defaults
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColumnArg {
    Hour,
    Minute,
    Period,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    Up,
    Down,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Wake,
    Bed,
}

pub fn run(action: PickerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open()?;
    let mut planner = store.load_or_default();

    match action {
        PickerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&planner.snapshot())?);
        }
        PickerAction::Set { time } => {
            let event = planner.set_time(TimeOfDay::parse(&time)?);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        PickerAction::Step { column, direction } => {
            let column = match column {
                ColumnArg::Hour => Column::Hour,
                ColumnArg::Minute => Column::Minute,
                ColumnArg::Period => Column::Period,
            };
            let direction = match direction {
                DirectionArg::Up => StepDirection::Up,
                DirectionArg::Down => StepDirection::Down,
            };
            match planner.step(column, direction) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("{}", serde_json::to_string_pretty(&planner.snapshot())?),
            }
        }
        PickerAction::Mode { mode } => {
            let mode = match mode {
                ModeArg::Wake => Mode::WakeAt,
                ModeArg::Bed => Mode::BedNow,
            };
            let now = Local::now();
            let event = planner.set_mode(mode, TimeOfDay::from_hm(now.hour() as u8, now.minute() as u8));
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        PickerAction::Format { format } => {
            let event = planner.set_format(format.into());
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        PickerAction::Select { index } => match planner.select(index) {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => {
                eprintln!("index out of range (0-3)");
                std::process::exit(1);
            }
        },
        PickerAction::Reset => {
            planner = Planner::default();
            println!("{}", serde_json::to_string_pretty(&planner.snapshot())?);
        }
    }

    store.save(&planner)?;
    Ok(())
}
