//! Launch the dw-tui standalone binary.

use std::path::Path;

/// Launch the dw-tui standalone binary.
pub fn run(tab: &str, seed: Option<u64>, config: Option<&Path>) -> Result<(), String> {
    let mut command = std::process::Command::new("dw-tui");
    command.arg("--tab").arg(tab);
    if let Some(seed) = seed {
        command.arg("--seed").arg(seed.to_string());
    }
    if let Some(config) = config {
        command.arg("--config").arg(config);
    }

    match command.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("dw-tui exited with {s}")),
        Err(_) => {
            Err("dw-tui binary not found. Install with: cargo install --path crates/dw-tui".into())
        }
    }
}
