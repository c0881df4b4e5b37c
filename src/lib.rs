//! # N-Puzzle Solver Library
//!
//! This library solves the N x N sliding puzzle (the 8-puzzle, 15-puzzle and
//! larger) optimally with A* search and the Manhattan-distance heuristic.
//! Solvability is decided by the search itself: the board and its twin (the
//! same board with one pair of tiles swapped) are searched together, and
//! whichever reaches the goal first tells which of the two was solvable.
//!
//! It is used by two binaries:
//! - `npuzzle`: Reads a board file and prints the minimum number of moves and
//!   every board along a shortest solution, or `No solution possible`.
//! - `scramble`: Writes a random board in the same file format.
//!
//! ## Modules
//! - `engine`: The `Board` tile layout: neighbors, twin, goal test, parity.
//! - `heuristics`: Manhattan and Hamming distances, inversion counting.
//! - `puzzle`: The `SlidingPuzzle` trait the search is written against.
//! - `queue`: A binary min-heap ordered by an explicit comparator.
//! - `node`: Search nodes, their ordering, and the parent-link arena.
//! - `solver`: The dual A* search and its result accessors.
//! - `utils`: Board parsing, file loading and report output.
//! - `error`: Error types.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod node;
pub mod puzzle;
pub mod queue;
pub mod solver;
pub mod utils;

pub use engine::Board;
pub use error::{BoardError, SolveError};
pub use puzzle::SlidingPuzzle;
pub use solver::{SearchStats, Solver};
