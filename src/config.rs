//! Runtime configuration, read once from the environment at startup.

use std::env;

/// Default terminal columns per board block.
pub const DEFAULT_CELL_WIDTH: u16 = 2;

const SEED_VAR: &str = "BLOCKFALL_SEED";
const LOG_PATH_VAR: &str = "BLOCKFALL_LOG_PATH";
const CELL_WIDTH_VAR: &str = "BLOCKFALL_CELL_WIDTH";

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for the piece randomizer. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// JSON-lines event log. `None` disables logging.
    pub log_path: Option<String>,
    /// Terminal columns per board block (1..=4).
    pub cell_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl Config {
    /// Create from environment variables. Unparseable values fall back to
    /// their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(LOG_PATH_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let cell_width = lookup(CELL_WIDTH_VAR)
            .and_then(|s| s.trim().parse().ok())
            .filter(|w| (1..=4).contains(w))
            .unwrap_or(DEFAULT_CELL_WIDTH);

        Self {
            seed,
            log_path,
            cell_width,
        }
    }
}
