use clap::Subcommand;
use nightowl_core::Preferences;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a preference value
    Get {
        /// Preference key (e.g. "latency", "timeFormat")
        key: String,
    },
    /// Set a preference value
    Set {
        /// Preference key
        key: String,
        /// New value
        value: String,
    },
    /// List all preferences
    List,
    /// Reset preferences to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let prefs = Preferences::load_or_default();
            match prefs.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut prefs = Preferences::load_or_default();
            prefs.set(&key, &value)?;
            prefs.save()?;
            println!("ok");
        }
        ConfigAction::List => {
            let prefs = Preferences::load_or_default();
            println!("{}", serde_json::to_string_pretty(&prefs)?);
        }
        ConfigAction::Reset => {
            let prefs = Preferences::default();
            prefs.save()?;
            println!("preferences reset to defaults");
        }
    }
    Ok(())
}
