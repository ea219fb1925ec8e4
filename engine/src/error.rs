use thiserror::Error;

/// Why a single command was rejected. The game always carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("expected `<verb> <x>,<y>`")]
    MissingCoordinates,
    #[error("coordinates must be two integers separated by a comma, got [{0}]")]
    MalformedCoordinates(String),
    #[error("unknown command [{0}]")]
    UnknownVerb(String),
    #[error("no cell at ({x}, {y})")]
    CellNotFound { x: i64, y: i64 },
    #[error("the game is already over")]
    GameOver,
}

/// Parameters a grid cannot be built from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("{mines} mines do not fit in {cells} cells")]
    TooManyMines { mines: usize, cells: usize },
    #[error("mine index {index} is outside a grid of {cells} cells")]
    MineOutOfRange { index: usize, cells: usize },
    #[error("mine index {0} was placed twice")]
    DuplicateMine(usize),
    #[error("{what} must be between {min} and {max}, got {value}")]
    OutOfBounds {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    #[error("expected a number, got [{0}]")]
    NotANumber(String),
}
