//! Search nodes, their ordering, and the arena that resolves parent links.
use crate::puzzle::SlidingPuzzle;
use crate::queue::Comparator;
use std::cmp::Ordering;

/// Which of the two interleaved searches a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Rooted at the board being solved.
    Primary,
    /// Rooted at the twin of that board.
    Twin,
}

/// Index of an expanded node inside a [`SearchTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A board plus the bookkeeping A* needs.
///
/// `moves` and `heuristic` are fixed at construction, and `origin` is
/// inherited unchanged from the parent.
#[derive(Clone, Debug)]
pub struct SearchNode<B> {
    board: B,
    parent: Option<NodeId>,
    moves: u32,
    heuristic: u32,
    origin: Origin,
}

impl<B: SlidingPuzzle> SearchNode<B> {
    /// Root node of one of the searches.
    pub fn root(board: B, origin: Origin) -> Self {
        let heuristic = board.heuristic();
        SearchNode {
            board,
            parent: None,
            moves: 0,
            heuristic,
            origin,
        }
    }

    /// Node for `board`, one move after `parent` (stored in the tree as `parent_id`).
    pub fn child(board: B, parent_id: NodeId, parent: &SearchNode<B>) -> Self {
        let heuristic = board.heuristic();
        SearchNode {
            board,
            parent: Some(parent_id),
            moves: parent.moves + 1,
            heuristic,
            origin: parent.origin,
        }
    }
}

impl<B> SearchNode<B> {
    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Moves from the search root (g).
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Estimated moves remaining (h).
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// A* priority, `g + h`.
    pub fn priority(&self) -> u32 {
        self.moves + self.heuristic
    }
}

/// Orders nodes by priority, then by heuristic, both ascending.
///
/// Preferring the smaller heuristic among equal priorities favors nodes
/// closer to the goal, which cuts expansions on plateaus.
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeOrder;

impl<B> Comparator<SearchNode<B>> for NodeOrder {
    fn compare(&self, a: &SearchNode<B>, b: &SearchNode<B>) -> Ordering {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.heuristic.cmp(&b.heuristic))
    }
}

/// Arena owning every expanded node.
///
/// Nodes only ever point at nodes added before them, so parent chains are
/// finite and end at a root.
#[derive(Debug)]
pub struct SearchTree<B> {
    nodes: Vec<SearchNode<B>>,
}

impl<B> SearchTree<B> {
    pub fn new() -> Self {
        SearchTree { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Moves a node into the arena and returns its id.
    pub fn add(&mut self, node: SearchNode<B>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// # Panics
    /// Panics if `id` did not come from this tree.
    pub fn get(&self, id: NodeId) -> &SearchNode<B> {
        &self.nodes[id.0]
    }

    /// Board of the node's parent, if it has one.
    pub fn parent_board(&self, node: &SearchNode<B>) -> Option<&B> {
        node.parent.map(|id| &self.get(id).board)
    }
}

impl<B: Clone> SearchTree<B> {
    /// Boards from the root of `id`'s chain down to `id` itself.
    pub fn path_to(&self, id: NodeId) -> Vec<B> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let node = self.get(id);
            path.push(node.board.clone());
            current = node.parent;
        }
        path.reverse();
        path
    }
}

impl<B> Default for SearchTree<B> {
    fn default() -> Self {
        Self::new()
    }
}
