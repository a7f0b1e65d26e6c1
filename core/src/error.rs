use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Too many items for this board")]
    TooManyItems,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Cell is already revealed")]
    AlreadyRevealed,
    #[error("Cell is marked with a flag or question mark")]
    MarkedCell,
    #[error("No flags left")]
    OutOfFlags,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure to load a [`GameConfig`](crate::GameConfig) from an external document.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] GameError),
}
