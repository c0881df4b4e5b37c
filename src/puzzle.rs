//! The capability set the search core needs from a puzzle state.

/// A puzzle state the dual A* search can run on.
///
/// Implementors are immutable values: every method that produces a different
/// layout returns a new value and leaves `self` untouched. `Eq` is structural
/// equality of layouts; the solver uses it to avoid stepping straight back to
/// a node's parent.
pub trait SlidingPuzzle: Clone + Eq {
    /// Admissible estimate of the moves remaining to the goal.
    fn heuristic(&self) -> u32;

    /// Whether this layout is the solved arrangement.
    fn is_goal(&self) -> bool;

    /// Every layout reachable by one legal move, in a deterministic order.
    fn neighbors(&self) -> Vec<Self>;

    /// A layout with exactly one pair of non-blank tiles swapped.
    ///
    /// The twin has the opposite solvability from `self`, which is what lets
    /// the solver prove infeasibility by racing the two searches.
    fn twin(&self) -> Self;

    /// Whether `twin` is defined for this layout.
    fn can_seed_search(&self) -> bool {
        true
    }
}
