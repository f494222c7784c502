//! High-score persistence: one native-endian `i32`, nothing else.
//!
//! Reading never fails from the caller's point of view: a missing or
//! damaged file just means no high score yet.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const RECORD_LEN: usize = std::mem::size_of::<i32>();

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("high score file holds {len} bytes, expected at least 4")]
    Truncated { len: usize },
}

#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score. Bytes past the first record are ignored.
    pub fn try_load(&self) -> Result<i32, HighScoreError> {
        let bytes = fs::read(&self.path)?;
        let record: [u8; RECORD_LEN] = bytes
            .get(..RECORD_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or(HighScoreError::Truncated { len: bytes.len() })?;
        Ok(i32::from_ne_bytes(record))
    }

    /// Stored score, or 0 when there is none or it can't be read.
    pub fn load(&self) -> i32 {
        match self.try_load() {
            Ok(score) => {
                log::info!("Loaded high score {} from {}", score, self.path.display());
                score
            }
            Err(HighScoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score file at {}, starting fresh", self.path.display());
                0
            }
            Err(e) => {
                log::warn!("Ignoring high score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrite the file with `score`.
    pub fn save(&self, score: i32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_ne_bytes())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}
