use chrono::{Local, Timelike};
use clap::{Args, Subcommand};
use nightowl_core::{compute_candidates, Mode, Preferences, TimeOfDay};

use super::FormatArg;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Plan bed times for a target wake time
    Wake {
        /// Target wake time as HH:MM (24-hour)
        #[arg(long)]
        time: String,
        #[command(flatten)]
        opts: PlanOpts,
    },
    /// Plan wake times for going to bed now
    Bed {
        /// Bed time as HH:MM (24-hour); defaults to the current time
        #[arg(long)]
        time: Option<String>,
        #[command(flatten)]
        opts: PlanOpts,
    },
}

#[derive(Args)]
pub struct PlanOpts {
    /// Override stored sleep latency (minutes, 0-60)
    #[arg(long)]
    latency: Option<u16>,
    /// Override stored cycle length (minutes, 80-110)
    #[arg(long)]
    cycle_length: Option<u16>,
    /// Override stored wake window (minutes, 0-30)
    #[arg(long)]
    wake_window: Option<u16>,
    /// Display format: 12 or 24
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// Print candidates as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mode, time, opts) = match action {
        PlanAction::Wake { time, opts } => (Mode::WakeAt, Some(time), opts),
        PlanAction::Bed { time, opts } => (Mode::BedNow, time, opts),
    };

    let anchor = match time {
        Some(s) => TimeOfDay::parse(&s)?,
        None => {
            let now = Local::now();
            TimeOfDay::from_hm(now.hour() as u8, now.minute() as u8)
        }
    };

    // Stored preferences are the base; flags override per invocation.
    let prefs = Preferences::load_or_default();
    let mut settings = prefs.plan_settings();
    if let Some(v) = opts.latency {
        settings.latency_min = v;
    }
    if let Some(v) = opts.cycle_length {
        settings.cycle_len_min = v;
    }
    if let Some(v) = opts.wake_window {
        settings.wake_window_min = v;
    }
    settings.clamp();

    let format = match opts.format {
        Some(arg) => arg.into(),
        None => prefs.time_format,
    };

    let candidates = compute_candidates(anchor, mode, &settings);
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else {
        super::print_candidates(mode, &candidates, format);
    }
    Ok(())
}
