//! CLI frontend for the dicewell dice roller and mental health companion.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dw_dice::DiceSelection;

#[derive(Parser)]
#[command(
    name = "dw",
    about = "dicewell — roll dice and get mood-based recommendations",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll one or two six-sided dice
    Roll {
        /// Number of dice (1 or 2)
        #[arg(short = 'n', long, default_value = "1")]
        count: DiceSelection,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the roll as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a profile and print mood and diet recommendations
    Advise {
        /// Your name (at least 4 characters)
        #[arg(long)]
        name: Option<String>,

        /// Your age (greater than 8)
        #[arg(long)]
        age: Option<String>,

        /// How you feel: happy, sad, anxious, excited, angry
        #[arg(long)]
        mood: Option<String>,

        /// Stress level from 1 to 10
        #[arg(long)]
        stress: Option<String>,

        /// Diet goal: weight_loss, muscle_gain, maintain_health
        #[arg(long)]
        diet: Option<String>,

        /// Read the profile from a TOML file; flags override its values
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available moods and diet goals
    Choices,

    /// Launch the interactive terminal UI
    Tui {
        /// Start on a specific tab (dice, companion)
        #[arg(long, default_value = "dice")]
        tab: String,

        /// RNG seed for the dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// TOML config file for the TUI
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Roll { .. } => "roll",
            Commands::Advise { .. } => "advise",
            Commands::Choices => "choices",
            Commands::Tui { .. } => "tui",
        }
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    tracing::debug!(command = cli.command.name(), "dispatching command");

    let result = match cli.command {
        Commands::Roll { count, seed, json } => commands::roll::run(count, seed, json),
        Commands::Advise {
            name,
            age,
            mood,
            stress,
            diet,
            profile,
            json,
        } => {
            let flags = commands::advise::ProfileFlags {
                name,
                age,
                mood,
                stress,
                diet,
            };
            commands::advise::run(profile.as_deref(), flags, json)
        }
        Commands::Choices => commands::choices::run(),
        Commands::Tui { tab, seed, config } => commands::tui::run(&tab, seed, config.as_deref()),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, quiet unless `RUST_LOG` asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
