//! File logging for the TUI.
//!
//! Logging is off by default so the alternate screen stays clean. Set
//! `DICEWELL_LOG` to a file path to enable it; `RUST_LOG` controls the filter.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "DICEWELL_LOG";

/// Install a file subscriber if `DICEWELL_LOG` is set.
pub fn init() {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let file = match std::fs::File::create(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("warning: cannot create log file {}: {e}", path.to_string_lossy());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
