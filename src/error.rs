//! Error types for the pacsearch crate

use thiserror::Error;

/// Main error type for the pacsearch crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("layout has no rows")]
    EmptyLayout,

    #[error("layout row {line} has width {got}, expected {expected}")]
    RaggedLayout {
        line: usize,
        got: usize,
        expected: usize,
    },

    #[error("unknown layout character '{character}' at line {line}, column {column}")]
    UnknownLayoutCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("layout has no Pacman start position ('P')")]
    MissingPacman,

    #[error("layout has {count} Pacman start positions, expected exactly one")]
    DuplicatePacman { count: usize },

    #[error("position ({x}, {y}) is a wall")]
    WallPosition { x: i32, y: i32 },

    #[error("position ({x}, {y}) is outside the layout")]
    OutOfBounds { x: i32, y: i32 },

    #[error("search depth must be at least 1, got {depth}")]
    InvalidSearchDepth { depth: u32 },

    #[error("agent {agent} has no legal actions in a non-terminal state")]
    NoLegalActions { agent: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
