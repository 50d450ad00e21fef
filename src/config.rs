use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::boggle::{MIN_WORD_LENGTH, N_BOGGLE_DICE};
use crate::error::BoggleError;

/// Settings for a game, loadable from a JSON file. Any missing field falls back to its default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shortest word either player may score
    pub min_word_length: usize,
    /// Word list with one word per line
    pub dictionary: PathBuf,
    /// JSON board file. A board is shaken when this is not set
    pub board: Option<PathBuf>,
    /// Seed used when shaking the board
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_word_length: MIN_WORD_LENGTH,
            dictionary: PathBuf::from("dictionary.txt"),
            board: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, BoggleError> {
        let content = std::fs::read_to_string(path).map_err(|source| BoggleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&content).map_err(|source| BoggleError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file, falling back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, BoggleError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), BoggleError> {
        if self.min_word_length == 0 || self.min_word_length > N_BOGGLE_DICE {
            return Err(BoggleError::Config(format!(
                "min_word_length must be between 1 and {}",
                N_BOGGLE_DICE
            )));
        }
        Ok(())
    }
}
