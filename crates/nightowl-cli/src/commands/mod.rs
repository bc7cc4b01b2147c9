pub mod config;
pub mod picker;
pub mod plan;
pub mod share;

use clap::ValueEnum;
use nightowl_core::{Candidate, Mode, TimeFormat};

/// Display format argument shared by the plan and picker commands.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    #[value(name = "12")]
    H12,
    #[value(name = "24")]
    H24,
}

impl From<FormatArg> for TimeFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::H12 => TimeFormat::H12,
            FormatArg::H24 => TimeFormat::H24,
        }
    }
}

/// Render the candidate list as a human-readable table.
pub fn print_candidates(mode: Mode, candidates: &[Candidate], format: TimeFormat) {
    let heading = match mode {
        Mode::WakeAt => "Go to bed at...",
        Mode::BedNow => "Wake up at...",
    };
    println!("{heading}");
    for c in candidates {
        let mark = if c.best {
            "*"
        } else if c.recommended {
            "+"
        } else {
            " "
        };
        let window = match c.window() {
            Some((start, end)) => {
                format!("  window {} - {}", start.format(format), end.format(format))
            }
            None => String::new(),
        };
        println!(
            "{mark} {}  {} cycles  {}{window}",
            c.time.format(format),
            c.cycles,
            c.time_in_bed(),
        );
    }
}
