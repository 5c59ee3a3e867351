//! Runner configuration.
//!
//! Values are layered: built-in defaults, then `LIGHTS_OUT_*` environment
//! variables, then command-line flags.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `LIGHTS_OUT_ROWS` | `--rows N` | 5 |
//! | `LIGHTS_OUT_COLS` | `--cols N` | 5 |
//! | `LIGHTS_OUT_CHANCE` | `--chance P` | 0.25 |
//! | `LIGHTS_OUT_SEED` | `--seed N` | clock |
//! | `LIGHTS_OUT_REROLL` | `--reroll` | off |
//! | `LIGHTS_OUT_LOG_PATH` | - | logging off |
//!
//! Unparseable environment values fall back to the default with a warning.
//! Bad flags are errors. Rows and cols must be within `1..=MAX_DIMENSION`;
//! a finite chance outside `[0, 1]` is clamped with a warning.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::core::SessionConfig;
use crate::types::{
    StartPolicy, DEFAULT_COLS, DEFAULT_LIT_PROBABILITY, DEFAULT_ROWS, MAX_DIMENSION,
};

pub const USAGE: &str = "\
Usage: lights-out [--rows N] [--cols N] [--chance P] [--seed N] [--reroll]

Turn every light off. Toggling a light also toggles its four neighbours.

Options:
  --rows N      board height (1-20, default 5)
  --cols N      board width (1-20, default 5)
  --chance P    chance each light starts on (0-1, default 0.25)
  --seed N      random seed (default: clock)
  --reroll      redraw boards that start already solved
  -h, --help    print this help

Environment: LIGHTS_OUT_ROWS, LIGHTS_OUT_COLS, LIGHTS_OUT_CHANCE,
LIGHTS_OUT_SEED, LIGHTS_OUT_REROLL, LIGHTS_OUT_LOG_PATH (log file; RUST_LOG sets level)
";

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(GameConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub lit_probability: f64,
    pub seed: Option<u64>,
    pub start_policy: StartPolicy,
    pub log_path: Option<PathBuf>,
    /// Problems found while loading, logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            lit_probability: DEFAULT_LIT_PROBABILITY,
            seed: None,
            start_policy: StartPolicy::AcceptInstantWin,
            log_path: None,
            warnings: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Defaults + environment + `args` (without the program name)
    pub fn load(args: &[String]) -> Result<Command> {
        parse_args(Self::from_env(), args)
    }

    /// Create from `LIGHTS_OUT_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from any key lookup (environment stand-in for tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = var("LIGHTS_OUT_ROWS") {
            match v.parse() {
                Ok(n) => config.rows = n,
                Err(_) => config.warn(format!("ignoring LIGHTS_OUT_ROWS={}: not a number", v)),
            }
        }
        if let Some(v) = var("LIGHTS_OUT_COLS") {
            match v.parse() {
                Ok(n) => config.cols = n,
                Err(_) => config.warn(format!("ignoring LIGHTS_OUT_COLS={}: not a number", v)),
            }
        }
        if let Some(v) = var("LIGHTS_OUT_CHANCE") {
            match v.parse() {
                Ok(p) => config.lit_probability = p,
                Err(_) => config.warn(format!("ignoring LIGHTS_OUT_CHANCE={}: not a number", v)),
            }
        }
        if let Some(v) = var("LIGHTS_OUT_SEED") {
            match v.parse() {
                Ok(s) => config.seed = Some(s),
                Err(_) => config.warn(format!("ignoring LIGHTS_OUT_SEED={}: not a number", v)),
            }
        }
        if let Some(v) = var("LIGHTS_OUT_REROLL") {
            if v == "1" || v.to_lowercase() == "true" {
                config.start_policy = StartPolicy::Reroll;
            }
        }
        config.log_path = var("LIGHTS_OUT_LOG_PATH").map(PathBuf::from);

        config
    }

    fn warn(&mut self, msg: String) {
        self.warnings.push(msg);
    }

    /// Check dimensions and clamp the lit chance into [0, 1].
    pub fn validate(mut self) -> Result<Self> {
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value == 0 || value > MAX_DIMENSION {
                bail!("{} must be between 1 and {}, got {}", name, MAX_DIMENSION, value);
            }
        }

        if !self.lit_probability.is_finite() {
            bail!("chance must be a number between 0 and 1, got {}", self.lit_probability);
        }
        let clamped = self.lit_probability.clamp(0.0, 1.0);
        if clamped != self.lit_probability {
            let msg = format!("chance {} clamped to {}", self.lit_probability, clamped);
            self.warn(msg);
            self.lit_probability = clamped;
        }

        Ok(self)
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            rows: self.rows,
            cols: self.cols,
            lit_probability: self.lit_probability,
            start_policy: self.start_policy,
        }
    }

    /// Configured seed, or one taken from the clock
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

/// Apply command-line flags on top of `config` and validate the result.
pub fn parse_args(mut config: GameConfig, args: &[String]) -> Result<Command> {
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--reroll" => config.start_policy = StartPolicy::Reroll,
            flag @ ("--rows" | "--cols" | "--chance" | "--seed") => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                let bad = || anyhow!("invalid {} value: {}", flag, v);
                match flag {
                    "--rows" => config.rows = v.parse().map_err(|_| bad())?,
                    "--cols" => config.cols = v.parse().map_err(|_| bad())?,
                    "--chance" => config.lit_probability = v.parse().map_err(|_| bad())?,
                    _ => config.seed = Some(v.parse().map_err(|_| bad())?),
                }
            }
            other => bail!("unknown argument: {}", other),
        }
        i += 1;
    }

    Ok(Command::Play(config.validate()?))
}
