use crate::engine::{Board, MAX_DIMENSION};
use crate::error::BoardError;
use crate::solver::Solver;
use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Parses a board from its text form.
///
/// The input is a sequence of whitespace-separated integers: the dimension
/// `N` followed by the `N * N` tile labels in row-major order, `0` marking the
/// blank. Line breaks carry no meaning, so the usual one-row-per-line layout
/// and a single line of numbers both work.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful.
/// * `Err(BoardError)` if the input is empty, a token is not a non-negative
///   integer, the dimension is out of range, the tile count is wrong, or the
///   labels are not a permutation of `0..N*N`.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.tile_at(1, 1), 2);
///
/// assert!(board_from_str("2\n1 2\n3").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, BoardError> {
    let mut tokens = s.split_whitespace();

    let n_token = tokens.next().ok_or(BoardError::MissingDimension)?;
    let n: usize = n_token
        .parse()
        .map_err(|_| BoardError::InvalidNumber(n_token.to_string()))?;
    if n == 0 || n > MAX_DIMENSION {
        return Err(BoardError::InvalidDimension(n));
    }

    let max = (n * n - 1) as u32;
    let mut tiles = Vec::with_capacity(n * n);
    for token in tokens {
        let tile: u32 = token
            .parse()
            .map_err(|_| BoardError::InvalidNumber(token.to_string()))?;
        if tile > max {
            return Err(BoardError::TileOutOfRange { tile, max });
        }
        tiles.push(tile as u16);
    }

    Board::from_tiles(n, tiles)
}

/// Reads and parses a board file. See [`board_from_str`] for the format.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, BoardError> {
    let content = fs::read_to_string(path)?;
    board_from_str(&content)
}

/// Writes the outcome of a search.
///
/// An unsolvable board produces the single line `No solution possible`.
/// Otherwise the first line is `Minimum number of moves = k`, followed by
/// every board of the solution from initial to goal, each followed by a blank
/// line.
pub fn write_report<B: Display, W: Write>(solver: &Solver<B>, out: &mut W) -> io::Result<()> {
    match solver.moves() {
        None => writeln!(out, "No solution possible"),
        Some(moves) => {
            writeln!(out, "Minimum number of moves = {}", moves)?;
            for board in solver.solution_iter() {
                writeln!(out, "{}", board)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}
