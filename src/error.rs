use std::path::PathBuf;

/// Why a move was refused. The game is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    GameOver,
}

/// Errors from driving a session with a move source.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("not a column number: {0:?}")]
    InvalidInput(String),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("scripted moves ran out before the game finished")]
    MovesExhausted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading session settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
