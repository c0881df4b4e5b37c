//! Puzzle-state representation for the N x N sliding puzzle.
//!
//! This module defines `Board`, an immutable tile layout. A board knows how to
//! measure its distance to the goal, enumerate the layouts one move away, and
//! produce its twin (the same layout with one pair of tiles swapped), which is
//! everything the solver needs through the `SlidingPuzzle` trait.
use crate::error::BoardError;
use crate::heuristics::{count_inversions, hamming, manhattan};
use crate::puzzle::SlidingPuzzle;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Largest supported board dimension. Tile labels are stored as `u16`, so the
/// highest label `N * N - 1` has to fit in one.
pub const MAX_DIMENSION: usize = 256;

/// An immutable N x N sliding-puzzle layout.
///
/// Tiles are stored row-major; `0` is the blank. The goal layout holds
/// `1..N*N` in order with the blank in the bottom-right cell. Every operation
/// that changes the layout returns a new `Board`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    tiles: Vec<u16>,
    blank: usize,
}

impl Board {
    /// Creates a board from rows of tile labels.
    ///
    /// # Arguments
    /// * `rows`: `N` rows of `N` labels each, `0` marking the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` if the rows form a square grid holding every label in
    ///   `0..N*N` exactly once.
    /// * `Err(BoardError)` describing the first problem found otherwise.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::Board;
    /// let board = Board::new(vec![vec![1, 2], vec![3, 0]]).unwrap();
    /// assert!(board.is_goal());
    /// assert!(Board::new(vec![vec![1, 1], vec![3, 0]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<u16>>) -> Result<Self, BoardError> {
        let n = rows.len();
        let mut tiles = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(BoardError::TileCount {
                    expected: n,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }
        Self::from_tiles(n, tiles)
    }

    /// Creates a board of dimension `n` from a row-major tile vector.
    ///
    /// Validation is the same as for [`Board::new`].
    pub fn from_tiles(n: usize, tiles: Vec<u16>) -> Result<Self, BoardError> {
        if n == 0 || n > MAX_DIMENSION {
            return Err(BoardError::InvalidDimension(n));
        }
        if tiles.len() != n * n {
            return Err(BoardError::TileCount {
                expected: n * n,
                found: tiles.len(),
            });
        }

        let max = (n * n - 1) as u32;
        let mut seen = vec![false; n * n];
        for &tile in &tiles {
            if tile as u32 > max {
                return Err(BoardError::TileOutOfRange {
                    tile: tile as u32,
                    max,
                });
            }
            if seen[tile as usize] {
                return Err(BoardError::DuplicateTile(tile));
            }
            seen[tile as usize] = true;
        }

        // Every label in 0..n*n appears exactly once, so the blank exists.
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();
        Ok(Board { n, tiles, blank })
    }

    /// Returns the solved board of dimension `n`.
    ///
    /// # Panics
    /// Panics if `n` is zero or larger than `MAX_DIMENSION`.
    pub fn goal(n: usize) -> Self {
        assert!(
            (1..=MAX_DIMENSION).contains(&n),
            "Board dimension {} out of range",
            n
        );
        let mut tiles: Vec<u16> = (1..(n * n) as u32).map(|t| t as u16).collect();
        tiles.push(0);
        Board {
            n,
            tiles,
            blank: n * n - 1,
        }
    }

    /// Returns a solvable board reached by `walk` random moves from the goal.
    ///
    /// The walk never steps straight back onto the layout it just left, and the
    /// same `(n, walk, seed)` always yields the same board. The result is at
    /// most `walk` moves from the goal, possibly fewer.
    ///
    /// # Panics
    /// Panics if `n` is zero or larger than `MAX_DIMENSION`.
    pub fn scrambled(n: usize, walk: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = Board::goal(n);
        let mut previous: Option<Board> = None;

        for _ in 0..walk {
            let candidates: Vec<Board> = current
                .neighbors()
                .into_iter()
                .filter(|b| previous.as_ref() != Some(b))
                .collect();
            if candidates.is_empty() {
                break; // 1x1 board
            }
            let next = candidates[rng.gen_range(0..candidates.len())].clone();
            previous = Some(std::mem::replace(&mut current, next));
        }
        current
    }

    /// Returns a uniformly random permutation of the tiles.
    ///
    /// Roughly half of these boards are unsolvable.
    ///
    /// # Panics
    /// Panics if `n` is zero or larger than `MAX_DIMENSION`.
    pub fn shuffled(n: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal(n);
        board.tiles.shuffle(&mut rng);
        board.blank = board.tiles.iter().position(|&t| t == 0).unwrap_or_default();
        board
    }

    /// Board dimension `N`.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Row-major tile labels.
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Returns the tile at the specified row and column.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the board.
    pub fn tile_at(&self, row: usize, col: usize) -> u16 {
        assert!(row < self.n && col < self.n, "({}, {}) is off the board", row, col);
        self.tiles[row * self.n + col]
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.n, self.blank % self.n)
    }

    /// Number of tiles out of place.
    pub fn hamming(&self) -> u32 {
        hamming(&self.tiles, self.n)
    }

    /// Sum of the Manhattan distances of the tiles to their goal cells.
    pub fn manhattan(&self) -> u32 {
        manhattan(&self.tiles, self.n)
    }

    /// Whether this is the solved layout.
    pub fn is_goal(&self) -> bool {
        self.tiles[..self.tiles.len() - 1]
            .iter()
            .enumerate()
            .all(|(idx, &tile)| tile as usize == idx + 1)
    }

    /// Inversion-parity test for solvability.
    ///
    /// With an odd dimension a board is solvable iff its inversion count is
    /// even. With an even dimension the blank's row (counted from the top)
    /// takes part: the board is solvable iff inversions plus that row is odd.
    ///
    /// The solver does not use this; it proves infeasibility by search. It is
    /// here to generate solvable boards and to cross-check results.
    pub fn is_solvable(&self) -> bool {
        let inversions = count_inversions(&self.tiles);
        if self.n % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank / self.n) % 2 == 1
        }
    }

    /// All boards reachable by sliding one tile into the blank.
    ///
    /// The order is fixed: the blank moves up, down, left, then right,
    /// skipping directions that leave the board.
    pub fn neighbors(&self) -> Vec<Board> {
        let n = self.n;
        let (row, col) = self.blank();
        let mut neighbors = Vec::with_capacity(4);

        if row > 0 {
            neighbors.push(self.slide(self.blank - n));
        }
        if row + 1 < n {
            neighbors.push(self.slide(self.blank + n));
        }
        if col > 0 {
            neighbors.push(self.slide(self.blank - 1));
        }
        if col + 1 < n {
            neighbors.push(self.slide(self.blank + 1));
        }
        neighbors
    }

    /// The board with the first two tiles of the first blank-free row swapped.
    ///
    /// # Panics
    /// Panics on a 1x1 board, which has no pair of tiles to swap.
    pub fn twin(&self) -> Board {
        assert!(self.n >= 2, "A {}x{} board has no twin", self.n, self.n);
        let row = if self.blank / self.n == 0 { 1 } else { 0 };
        let mut tiles = self.tiles.clone();
        tiles.swap(row * self.n, row * self.n + 1);
        Board {
            n: self.n,
            tiles,
            blank: self.blank,
        }
    }

    fn slide(&self, from: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, from);
        Board {
            n: self.n,
            tiles,
            blank: from,
        }
    }
}

impl SlidingPuzzle for Board {
    fn heuristic(&self) -> u32 {
        self.manhattan()
    }

    fn is_goal(&self) -> bool {
        Board::is_goal(self)
    }

    fn neighbors(&self) -> Vec<Self> {
        Board::neighbors(self)
    }

    fn twin(&self) -> Self {
        Board::twin(self)
    }

    fn can_seed_search(&self) -> bool {
        self.n >= 2
    }
}

impl fmt::Display for Board {
    /// Writes the loader format: `N`, then one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)?;
        for row in self.tiles.chunks(self.n) {
            writeln!(f)?;
            let line: Vec<String> = row.iter().map(|t| format!("{:2}", t)).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u16]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3);
        assert!(goal.is_goal());
        assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(goal.blank(), (2, 2));
        assert_eq!(goal.manhattan(), 0);
        assert_eq!(goal.hamming(), 0);
        assert!(goal.is_solvable());
        assert!(Board::goal(1).is_goal());
    }

    #[test]
    fn test_new_rejects_malformed_grids() {
        assert!(matches!(
            Board::new(vec![]),
            Err(BoardError::InvalidDimension(0))
        ));
        assert!(matches!(
            Board::new(vec![vec![1, 2, 3], vec![0, 4]]),
            Err(BoardError::TileCount { expected: 2, found: 3 })
        ));
        assert!(matches!(
            Board::new(vec![vec![1, 2], vec![4, 0]]),
            Err(BoardError::TileOutOfRange { tile: 4, max: 3 })
        ));
        assert!(matches!(
            Board::new(vec![vec![1, 2], vec![2, 0]]),
            Err(BoardError::DuplicateTile(2))
        ));
        assert!(matches!(
            Board::from_tiles(2, vec![1, 2, 0]),
            Err(BoardError::TileCount { expected: 4, found: 3 })
        ));
    }

    #[test]
    fn test_tile_access() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.dimension(), 3);
        assert_eq!(b.tile_at(0, 0), 8);
        assert_eq!(b.tile_at(1, 2), 2);
        assert_eq!(b.blank(), (1, 1));
        assert_eq!(b.manhattan(), 10);
        assert_eq!(b.hamming(), 5);
        assert!(!b.is_goal());
    }

    #[test]
    fn test_neighbors_of_center_blank() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let neighbors = b.neighbors();
        assert_eq!(
            neighbors,
            vec![
                board(&[&[8, 0, 3], &[4, 1, 2], &[7, 6, 5]]),
                board(&[&[8, 1, 3], &[4, 6, 2], &[7, 0, 5]]),
                board(&[&[8, 1, 3], &[0, 4, 2], &[7, 6, 5]]),
                board(&[&[8, 1, 3], &[4, 2, 0], &[7, 6, 5]]),
            ]
        );
        // The source board is untouched.
        assert_eq!(b.blank(), (1, 1));
    }

    #[test]
    fn test_neighbors_of_corner_blank() {
        let goal = Board::goal(3);
        let neighbors = goal.neighbors();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].blank(), (1, 2));
        assert_eq!(neighbors[1].blank(), (2, 1));
        for neighbor in &neighbors {
            assert!(neighbor.neighbors().contains(&goal));
            assert_eq!(neighbor.manhattan(), 1);
        }
    }

    #[test]
    fn test_twin_swaps_one_pair_and_flips_parity() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let twin = b.twin();
        assert_eq!(twin.tiles(), &[1, 8, 3, 4, 0, 2, 7, 6, 5]);
        assert_eq!(twin.blank(), b.blank());
        assert_ne!(b.is_solvable(), twin.is_solvable());

        // Blank on the first row: the swap moves to the second row.
        let top = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(top.twin().tiles(), &[0, 1, 3, 2, 4, 5, 7, 8, 6]);
        assert_eq!(top.twin().twin(), top);
    }

    #[test]
    fn test_is_solvable_even_dimension() {
        assert!(board(&[&[1, 2], &[3, 0]]).is_solvable());
        assert!(board(&[&[1, 2], &[0, 3]]).is_solvable());
        assert!(!board(&[&[2, 1], &[3, 0]]).is_solvable());

        let mut tiles: Vec<u16> = (1..16).collect();
        tiles.push(0);
        tiles.swap(13, 14); // 14 and 15 exchanged
        let b = Board::from_tiles(4, tiles).unwrap();
        assert!(!b.is_solvable());
        assert!(b.twin().is_solvable());
    }

    #[test]
    fn test_scrambled_is_deterministic_and_solvable() {
        for seed in 0..20 {
            let a = Board::scrambled(3, 30, seed);
            let b = Board::scrambled(3, 30, seed);
            assert_eq!(a, b);
            assert!(a.is_solvable());
        }
        assert_eq!(Board::scrambled(3, 0, 7), Board::goal(3));
        assert_eq!(Board::scrambled(1, 5, 7), Board::goal(1));
        assert_eq!(Board::scrambled(2, 1, 0).manhattan(), 1);
    }

    #[test]
    fn test_shuffled_is_a_permutation() {
        let b = Board::shuffled(4, 42);
        assert_eq!(b, Board::shuffled(4, 42));
        let mut sorted = b.tiles().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<u16>>());
        let (row, col) = b.blank();
        assert_eq!(b.tile_at(row, col), 0);
    }

    #[test]
    fn test_display_uses_loader_format() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.to_string(), "3\n 8  1  3\n 4  0  2\n 7  6  5");
    }
}
