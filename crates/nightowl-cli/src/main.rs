use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "nightowl-cli", version, about = "NightOwl sleep-cycle planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a sleep plan
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Interactive time-picker session
    Picker {
        #[command(subcommand)]
        action: commands::picker::PickerAction,
    },
    /// Preferences management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Share-link export and import
    Share {
        #[command(subcommand)]
        action: commands::share::ShareAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Picker { action } => commands::picker::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Share { action } => commands::share::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
