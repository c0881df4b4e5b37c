//! Distance estimates from a tile layout to the goal layout.
//!
//! Both functions take the row-major tile slice of an `n` x `n` board, where
//! `0` is the blank and tile `t` belongs at index `t - 1`. The blank never
//! contributes to either estimate.

/// Sum over all tiles of the grid distance between the tile's current cell
/// and its goal cell.
///
/// This is the A* heuristic: it never overestimates the remaining moves, and
/// it changes by exactly one per move, so it is also consistent.
///
/// # Examples
/// ```
/// use npuzzle_solver::heuristics::manhattan;
/// // 8 1 3 / 4 0 2 / 7 6 5
/// assert_eq!(manhattan(&[8, 1, 3, 4, 0, 2, 7, 6, 5], 3), 10);
/// ```
pub fn manhattan(tiles: &[u16], n: usize) -> u32 {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(idx, &tile)| {
            let goal = tile as usize - 1;
            let (row, col) = (idx / n, idx % n);
            let (goal_row, goal_col) = (goal / n, goal % n);
            (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
        })
        .sum()
}

/// Number of non-blank tiles that are not on their goal cell.
///
/// # Examples
/// ```
/// use npuzzle_solver::heuristics::hamming;
/// assert_eq!(hamming(&[8, 1, 3, 4, 0, 2, 7, 6, 5], 3), 5);
/// ```
pub fn hamming(tiles: &[u16], _n: usize) -> u32 {
    tiles
        .iter()
        .enumerate()
        .filter(|&(idx, &tile)| tile != 0 && tile as usize != idx + 1)
        .count() as u32
}

/// Number of inversions among the non-blank tiles read in row-major order.
///
/// Used by the parity test in `Board::is_solvable`.
pub fn count_inversions(tiles: &[u16]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}
