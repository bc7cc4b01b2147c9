use clap::Subcommand;
use nightowl_core::{Preferences, SessionStore, ShareLink};
use url::Url;

/// Base URL links are minted against.
const SHARE_BASE: &str = "https://nightowl.app/";

#[derive(Subcommand)]
pub enum ShareAction {
    /// Print a share link for the current session
    Export {
        /// Include a selected result index in the link
        #[arg(long)]
        selected: Option<usize>,
    },
    /// Apply a share link to the session and preferences
    Import {
        /// The shared URL
        url: String,
    },
}

pub fn run(action: ShareAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ShareAction::Export { selected } => {
            let store = SessionStore::open()?;
            let mut planner = store.load_or_default();
            if let Some(index) = selected {
                if planner.select(index).is_none() {
                    eprintln!("index out of range (0-3)");
                    std::process::exit(1);
                }
                store.save(&planner)?;
            }
            let base = Url::parse(SHARE_BASE)?;
            let link = ShareLink::from_planner(&planner);
            // Printing the URL is the fallback surface; there is no
            // clipboard to fail.
            println!("{}", link.to_url(&base));
        }
        ShareAction::Import { url } => {
            let link = ShareLink::parse(&url)?;
            let store = SessionStore::open()?;
            let mut planner = store.load_or_default();
            let mut prefs = Preferences::load_or_default();
            link.apply(&mut planner, &mut prefs);
            store.save(&planner)?;
            prefs.save()?;
            println!("{}", serde_json::to_string_pretty(&planner.snapshot())?);
        }
    }
    Ok(())
}
