//! Error types shared by the board loader and the solver.

use std::io;
use thiserror::Error;

/// Errors raised by the search core.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The initial board cannot seed a dual search (it has no twin).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `extract_min` was called on an empty queue.
    ///
    /// Seeing this from `Solver::solve` means the search ran out of nodes
    /// without either side reaching a goal, which is a logic defect rather
    /// than a property of the input.
    #[error("Priority queue is empty")]
    EmptyQueue,
}

/// Errors raised while reading or validating a board.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Failed to read board file: {0}")]
    Io(#[from] io::Error),

    #[error("Board input is empty, expected a dimension")]
    MissingDimension,

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Invalid dimension {0}, expected a value within 1..=256")]
    InvalidDimension(usize),

    #[error("Expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },

    #[error("Tile {tile} is out of range, labels must be within 0..={max}")]
    TileOutOfRange { tile: u32, max: u32 },

    #[error("Tile {0} appears more than once")]
    DuplicateTile(u16),
}
