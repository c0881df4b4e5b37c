//! Optimal solver: A* on the board and its twin, racing in one queue.
//!
//! Exactly one of a board and its twin can reach the goal, so whichever side
//! gets there first settles solvability. If the primary side wins, its parent
//! chain is the optimal solution; if the twin side wins, the board is proven
//! infeasible.
use crate::error::SolveError;
use crate::node::{NodeOrder, Origin, SearchNode, SearchTree};
use crate::puzzle::SlidingPuzzle;
use crate::queue::MinPq;
use tracing::{debug, info, trace};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Non-goal nodes taken off the queue and expanded.
    pub expanded: usize,
    /// Nodes inserted into the queue, both roots included.
    pub generated: usize,
    /// Largest queue size observed.
    pub max_frontier: usize,
}

/// Result of solving one board.
///
/// The search runs to completion inside [`Solver::solve`]; the accessors only
/// read what it found.
#[derive(Clone, Debug)]
pub struct Solver<B> {
    solution: Vec<B>,
    infeasible: bool,
    stats: SearchStats,
}

impl<B: SlidingPuzzle> Solver<B> {
    /// Finds an optimal solution for `initial`, or proves there is none.
    ///
    /// # Errors
    /// * `SolveError::InvalidArgument` if `initial` has no twin to race against.
    /// * `SolveError::EmptyQueue` if both searches run dry, which a puzzle with
    ///   the twin parity property never does.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::Board;
    /// use npuzzle_solver::solver::Solver;
    ///
    /// let board = Board::new(vec![vec![0, 1, 3], vec![4, 2, 5], vec![7, 8, 6]]).unwrap();
    /// let solver = Solver::solve(&board).unwrap();
    /// assert!(solver.is_solvable());
    /// assert_eq!(solver.moves(), Some(4));
    ///
    /// let solver = Solver::solve(&board.twin()).unwrap();
    /// assert_eq!(solver.move_count(), -1);
    /// ```
    pub fn solve(initial: &B) -> Result<Self, SolveError> {
        if !initial.can_seed_search() {
            return Err(SolveError::InvalidArgument(
                "initial board has no twin to search against".to_string(),
            ));
        }

        let mut open = MinPq::new(NodeOrder);
        let mut tree = SearchTree::new();
        let mut stats = SearchStats::default();

        let root = SearchNode::root(initial.clone(), Origin::Primary);
        debug!(heuristic = root.heuristic(), "starting dual A* search");
        open.insert(root);
        open.insert(SearchNode::root(initial.twin(), Origin::Twin));
        stats.generated = 2;
        stats.max_frontier = 2;

        let terminal = loop {
            let node = open.extract_min()?;
            if node.board().is_goal() {
                break node;
            }

            stats.expanded += 1;
            let id = tree.add(node);
            let node = tree.get(id);
            trace!(
                moves = node.moves(),
                heuristic = node.heuristic(),
                origin = ?node.origin(),
                frontier = open.len(),
                "expanding node"
            );

            let parent_board = tree.parent_board(node);
            for neighbor in node.board().neighbors() {
                if parent_board != Some(&neighbor) {
                    open.insert(SearchNode::child(neighbor, id, node));
                    stats.generated += 1;
                }
            }
            stats.max_frontier = stats.max_frontier.max(open.len());
        };

        let (solution, infeasible) = match terminal.origin() {
            Origin::Primary => {
                let id = tree.add(terminal);
                (tree.path_to(id), false)
            }
            Origin::Twin => (Vec::new(), true),
        };

        let solver = Solver {
            solution,
            infeasible,
            stats,
        };
        info!(
            solvable = solver.is_solvable(),
            moves = solver.move_count(),
            expanded = stats.expanded,
            generated = stats.generated,
            max_frontier = stats.max_frontier,
            "search finished"
        );
        Ok(solver)
    }
}

impl<B> Solver<B> {
    /// Whether the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        !self.infeasible
    }

    /// Minimum number of moves, or `None` if the board is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        if self.infeasible {
            None
        } else {
            Some(self.solution.len() - 1)
        }
    }

    /// Minimum number of moves, or `-1` if the board is unsolvable.
    pub fn move_count(&self) -> i64 {
        self.moves().map_or(-1, |moves| moves as i64)
    }

    /// Boards of a shortest solution, initial board first and goal last;
    /// `None` if the board is unsolvable.
    pub fn solution(&self) -> Option<&[B]> {
        if self.infeasible {
            None
        } else {
            Some(&self.solution)
        }
    }

    /// The same sequence as [`Solver::solution`], empty when unsolvable.
    pub fn solution_iter(&self) -> std::slice::Iter<'_, B> {
        self.solution.iter()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
