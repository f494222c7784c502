//! Runtime configuration read from the environment.

use std::path::PathBuf;

pub const SCORE_FILE_VAR: &str = "EGG_CATCHER_SCORE_FILE";
pub const LOG_FILE_VAR: &str = "EGG_CATCHER_LOG_FILE";

const DEFAULT_SCORE_FILE: &str = ".egg_catcher_highscore.dat";
const DEFAULT_LOG_FILE: &str = ".egg_catcher.log";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub score_path: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let home = PathBuf::from(get("HOME").unwrap_or_else(|| ".".to_string()));

        Config {
            score_path: get(SCORE_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| home.join(DEFAULT_SCORE_FILE)),
            log_path: get(LOG_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| home.join(DEFAULT_LOG_FILE)),
        }
    }
}
