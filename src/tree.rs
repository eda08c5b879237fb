//! Search tree data structures for Monte Carlo Tree Search
//!
//! The tree is stored as an arena of nodes addressed by index. Parent links
//! are plain indices into the same arena, so re-rooting after a real move is
//! an explicit copy-and-remap of the retained subtree with no dangling
//! references left behind.

use crate::board::{Color, Coord};

/// Index of a node within a [`SearchTree`] arena
pub type NodeId = usize;

/// A node in the MCTS tree, representing one board position
///
/// Nodes do not store a board snapshot; the search replays the producing
/// moves onto a working copy of the board while descending. Statistics are
/// mutated only by backpropagation, and the untried/children lists only by
/// expansion.
#[derive(Debug)]
pub struct Node {
    /// Back-reference to the parent, `None` for the root
    pub parent: Option<NodeId>,

    /// The move that produced this position from the parent (`None` only
    /// for the root)
    pub mv: Option<Coord>,

    /// The color to move in this position
    pub to_move: Color,

    /// Legal moves not yet expanded into children
    pub untried: Vec<Coord>,

    /// Expanded children, in expansion order
    pub children: Vec<NodeId>,

    /// Number of times this node has been visited
    pub visits: u64,

    /// Cumulative reward from simulations through this node
    ///
    /// Always accumulated from the engine's own fixed color, regardless of
    /// which color is to move here; backpropagation never flips the sign.
    pub reward: f64,
}

impl Node {
    fn new(parent: Option<NodeId>, mv: Option<Coord>, to_move: Color, untried: Vec<Coord>) -> Self {
        Node {
            parent,
            mv,
            to_move,
            untried,
            children: Vec::new(),
            visits: 0,
            reward: 0.0,
        }
    }

    /// Returns the average reward of this node, 0.0 if unvisited
    pub fn value(&self) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        self.reward / self.visits as f64
    }

    /// Returns true if every legal move here has been expanded
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }
}

/// An arena-allocated MCTS tree with a designated root
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SearchTree {
    /// Creates a tree holding only a root node
    ///
    /// `untried` is the legal-move list of the root position for `to_move`.
    pub fn new(to_move: Color, untried: Vec<Coord>) -> Self {
        SearchTree {
            nodes: vec![Node::new(None, None, to_move, untried)],
            root: 0,
        }
    }

    /// Returns the id of the root node
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns a shared reference to a node
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Returns a mutable reference to a node
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Expands `mv` out of `parent`'s untried list into a new child
    ///
    /// `to_move` and `untried` describe the position the move leads to.
    /// Panics if `mv` is not among the parent's untried moves; expansion
    /// candidates are always drawn from that list, so a miss is a caller bug.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        mv: Coord,
        to_move: Color,
        untried: Vec<Coord>,
    ) -> NodeId {
        let slot = self.nodes[parent]
            .untried
            .iter()
            .position(|&m| m == mv)
            .expect("expanded move must come from the untried list");
        self.nodes[parent].untried.remove(slot);

        let id = self.nodes.len();
        self.nodes
            .push(Node::new(Some(parent), Some(mv), to_move, untried));
        self.nodes[parent].children.push(id);
        id
    }

    /// Looks up the child of `parent` reached by `mv`
    pub fn find_child(&self, parent: NodeId, mv: Coord) -> Option<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].mv == Some(mv))
    }

    /// Promotes a child of the root to be the new root
    ///
    /// The promoted node's subtree is copied into a fresh compacted arena;
    /// its parent link and producing move are cleared, and everything
    /// outside the subtree (the old root and all siblings) is dropped.
    /// Visit counts and rewards of the retained nodes are untouched.
    pub fn reroot(&mut self, promoted: NodeId) {
        debug_assert_eq!(
            self.nodes[promoted].parent,
            Some(self.root),
            "only a direct child of the root can be promoted"
        );

        // Collect the retained subtree and assign compacted ids in
        // discovery order.
        let mut order = Vec::new();
        let mut stack = vec![promoted];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id].children.iter().copied());
        }

        let mut remap = vec![usize::MAX; self.nodes.len()];
        for (new_id, &old_id) in order.iter().enumerate() {
            remap[old_id] = new_id;
        }

        let mut nodes = Vec::with_capacity(order.len());
        for &old_id in &order {
            let old = &mut self.nodes[old_id];
            let mut node = Node {
                parent: old.parent,
                mv: old.mv,
                to_move: old.to_move,
                untried: std::mem::take(&mut old.untried),
                children: std::mem::take(&mut old.children),
                visits: old.visits,
                reward: old.reward,
            };
            node.parent = node.parent.map(|p| remap[p]);
            for child in &mut node.children {
                *child = remap[*child];
            }
            nodes.push(node);
        }

        // Explicitly detach the promoted node from its discarded parent
        nodes[0].parent = None;
        nodes[0].mv = None;

        self.nodes = nodes;
        self.root = 0;
    }
}
