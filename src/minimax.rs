use log::{debug, trace, warn};
use crate::game_tree::{GameTree, NodeId, Score};
use crate::role::Role::*;

impl<D> GameTree<D> {
    /// Scores every internal node below (and including) `id` from the
    /// terminal scores, children before parents, and returns the score of
    /// `id`.
    ///
    /// Each internal node folds its children in insertion order: the first
    /// scored child seeds the value, after which a Minimizer child replaces it
    /// only when strictly greater and a Maximizer child only when strictly
    /// smaller. Ties therefore keep the earliest child, which is what
    /// [`GameTree::best_child`] finds.
    ///
    /// Internal scores are recomputed from scratch, so evaluating again gives
    /// the same result. A node created by [`GameTree::add_terminal`] that was
    /// later given children folds them into its preset score instead. Leaves
    /// that were never given a score stay unscored and are skipped by their
    /// parent.
    pub fn evaluate(&mut self, id: NodeId) -> Option<Score> {
        let order = self.subtree_preorder(id);
        // reversed preorder visits every descendant before its ancestor
        for &v in order.iter().rev() {
            if self.arena[v.0].is_terminal() {
                if self.arena[v.0].score.is_none() {
                    warn!("terminal node {} has no score", v);
                }
                continue;
            }
            let score = self.fold_children(v);
            trace!("{} ({}) scored {:?}", v, self.arena[v.0].role, score);
            self.arena[v.0].score = score;
        }
        let score = self.arena[id.0].score;
        debug!("evaluated {} nodes below {}, score {:?}", order.len(), id, score);
        score
    }

    pub fn evaluate_root(&mut self) -> Option<Score> {
        self.evaluate(self.root())
    }

    fn fold_children(&self, id: NodeId) -> Option<Score> {
        let mut best: Option<Score> = self.arena[id.0].preset;
        for &child_i in &self.arena[id.0].children {
            let child = &self.arena[child_i.0];
            let child_score = match child.score {
                Some(score) => score,
                None => continue,
            };
            best = match (best, child.role) {
                (None, _) => Some(child_score),
                (Some(score), Minimizer) if child_score > score => Some(child_score),
                (Some(score), Maximizer) if child_score < score => Some(child_score),
                (unchanged, _) => unchanged,
            };
        }
        best
    }

    fn subtree_preorder(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(v) = stack.pop() {
            order.push(v);
            stack.extend(self.arena[v.0].children.iter().rev());
        }
        order
    }
}
