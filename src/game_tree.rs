use std::fmt;
use log::trace;
use crate::role::Role;

pub type Score = i64;

// handle into the arena of the tree that issued it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Node<D> {
    pub(crate) score: Option<Score>,
    // score handed to add_terminal, kept even if children get attached later
    pub(crate) preset: Option<Score>,
    pub(crate) role: Role,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub data: D,
}

impl<D> Node<D> {
    fn new(score: Option<Score>, role: Role, parent: Option<NodeId>, data: D) -> Self {
        Node {
            score,
            preset: score,
            role,
            parent,
            children: Vec::new(),
            data,
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.children.len() == 0
    }
}

/// A minimax decision tree. Nodes live in a single arena and refer to each
/// other by [`NodeId`]; the root is always at index 0 and is a
/// [`Role::Maximizer`].
#[derive(Debug, Clone)]
pub struct GameTree<D> {
    pub(crate) arena: Vec<Node<D>>,
}

impl<D> GameTree<D> {
    pub fn new(data: D) -> Self {
        GameTree {
            arena: vec![Node::new(None, Role::Maximizer, None, data)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Adds an internal node below `parent`. Its score is only known once the
    /// tree is evaluated.
    pub fn add_child(&mut self, parent: NodeId, data: D) -> NodeId {
        self.add(parent, None, data)
    }

    /// Adds a terminal node with a known score below `parent`. Terminal nodes
    /// are expected to stay childless.
    pub fn add_terminal(&mut self, parent: NodeId, score: Score, data: D) -> NodeId {
        self.add(parent, Some(score), data)
    }

    fn add(&mut self, parent: NodeId, score: Option<Score>, data: D) -> NodeId {
        let new_idx = NodeId(self.arena.len());
        let role = !self.arena[parent.0].role;
        self.arena[parent.0].children.push(new_idx);
        self.arena.push(Node::new(score, role, Some(parent), data));
        trace!("added {} ({}) below {}, score {:?}", new_idx, role, parent, score);
        new_idx
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<D>> {
        self.arena.get(id.0)
    }

    pub fn node(&self, id: NodeId) -> &Node<D> {
        &self.arena[id.0]
    }

    pub fn score(&self, id: NodeId) -> Option<Score> {
        self.arena[id.0].score
    }

    pub fn role(&self, id: NodeId) -> Role {
        self.arena[id.0].role
    }

    pub fn data(&self, id: NodeId) -> &D {
        &self.arena[id.0].data
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.arena[id.0].children
    }

    pub fn is_terminal(&self, id: NodeId) -> bool {
        self.arena[id.0].is_terminal()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    // the root always exists
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first child, in insertion order, whose score matches the
    /// score of `id`. `None` when `id` hasn't been scored yet or has no
    /// matching child.
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        let score = self.arena[id.0].score?;
        self.arena[id.0].children.iter()
            .find(|&&child| self.arena[child.0].score == Some(score))
            .copied()
    }

    /// Follows best children from `id` down to a leaf. `id` itself isn't part
    /// of the returned line.
    pub fn principal_variation(&self, id: NodeId) -> Vec<NodeId> {
        let mut line = Vec::new();
        let mut v = id;
        while let Some(best) = self.best_child(v) {
            line.push(best);
            v = best;
        }
        line
    }
}

impl<D: Default> Default for GameTree<D> {
    fn default() -> Self {
        GameTree::new(D::default())
    }
}
