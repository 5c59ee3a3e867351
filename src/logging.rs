//! Logging setup for the terminal runner.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records
//! cannot go to stderr. They are appended to the file named by
//! `LIGHTS_OUT_LOG_PATH`; without it logging stays off. `RUST_LOG` picks the
//! level and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install the global logger. Returns `Ok(false)` when no log file is configured.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already installed")?;
    Ok(true)
}
