use std::path::PathBuf;

/// Errors raised while setting up a game (loading files, building the board or dictionary)
#[derive(Debug, thiserror::Error)]
pub enum BoggleError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to build dictionary: {0}")]
    Dictionary(#[from] fst::Error),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("config validation error: {0}")]
    Config(String),
}

/// Reasons a word entered by the human player is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordRejection {
    #[error("'{word}' is too short, words need at least {min} letters")]
    TooShort { word: String, min: usize },

    #[error("'{0}' has already been found")]
    AlreadyFound(String),

    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),

    #[error("'{0}' cannot be formed on this board")]
    NotOnBoard(String),
}
