/// Best-score persistence: a single decimal number in a plain text file.

use std::path::{Path, PathBuf};

use crate::error::StoreError;

const FILE_NAME: &str = ".flappy_term_score";

#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.flappy_term_score`, or the working directory without a home.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files count as no best score yet.
    pub fn load(&self) -> u32 {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                log::debug!("no best score at {}: {}", self.path.display(), err);
                return 0;
            }
        };
        match text.trim().parse() {
            Ok(score) => score,
            Err(err) => {
                log::warn!("ignoring corrupt score file {}: {}", self.path.display(), err);
                0
            }
        }
    }

    pub fn save(&self, score: u32) -> Result<(), StoreError> {
        std::fs::write(&self.path, score.to_string()).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("saved best score {} to {}", score, self.path.display());
        Ok(())
    }
}
