//! Standalone TUI binary for dicewell.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use dw_dice::DiceSelection;
use dw_tui::config::TuiConfig;
use dw_tui::tabs::TabId;

#[derive(Parser)]
#[command(
    name = "dw-tui",
    about = "Terminal dice roller and mental health companion",
    version
)]
struct Args {
    /// Start on a specific tab (dice, companion)
    #[arg(long)]
    tab: Option<String>,

    /// RNG seed for the dice (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of dice shown on launch (1 or 2)
    #[arg(long)]
    dice: Option<DiceSelection>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    dw_tui::logging::init();

    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let tick_rate = config.tick_rate();
    let app = dw_tui::app::TuiApp::new(&config);

    if let Err(e) = dw_tui::terminal::run(app, tick_rate) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Layer command-line flags over the config file (or defaults).
fn build_config(args: &Args) -> Result<TuiConfig, String> {
    let mut config = match &args.config {
        Some(path) => TuiConfig::load(path).map_err(|e| e.to_string())?,
        None => TuiConfig::default(),
    };
    if let Some(name) = &args.tab {
        let tab = TabId::from_name(name).ok_or_else(|| format!("unknown tab: {name}"))?;
        config = config.with_tab(tab);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(dice) = args.dice {
        config = config.with_dice(dice);
    }
    Ok(config)
}
