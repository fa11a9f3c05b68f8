use std::path::PathBuf;

use crate::board::Player;

/// Errors from reading or writing a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square ({row}, {col}) is outside a {size}x{size} board")]
    IndexError { row: usize, col: usize, size: usize },

    #[error("square {index} is already occupied")]
    InvalidMove { index: usize },
}

/// Errors from dropping a mark into a column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already won by {winner}")]
    GameAlreadyWon { winner: Player },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors from moving the history cursor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("history index {index} out of range (history has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
