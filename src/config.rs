//! Runtime configuration read from the environment.

use std::env;
use std::time::Duration;

use crate::types::{DEFAULT_POPULATION, TARGET_FPS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Dancers spawned at startup.
    pub population: usize,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Run loop cadence, at least 1.
    pub target_fps: u32,
    /// Log file. Nothing is logged when unset since the terminal is taken.
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            seed: None,
            target_fps: TARGET_FPS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from `DANCE_*` environment variables. Unparsable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let population = lookup("DANCE_POPULATION")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_POPULATION);

        let seed = lookup("DANCE_SEED").and_then(|s| s.trim().parse().ok());

        let target_fps = lookup("DANCE_TARGET_FPS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(TARGET_FPS)
            .max(1);

        let log_path = lookup("DANCE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            population,
            seed,
            target_fps,
            log_path,
        }
    }

    /// Wall-clock budget of one frame.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}
