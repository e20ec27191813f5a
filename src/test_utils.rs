use crate::game_tree::{GameTree, NodeId, Score};

// classic two-ply lecture example: the root picks among B, C and D, each of which picks among three leaves
pub fn three_branch_tree() -> GameTree<&'static str> {
    let mut tree = GameTree::new("root");
    let root = tree.root();
    let b = tree.add_child(root, "B");
    let c = tree.add_child(root, "C");
    let d = tree.add_child(root, "D");

    tree.add_terminal(b, 3, "B1");
    tree.add_terminal(b, 12, "B2");
    tree.add_terminal(b, 8, "B3");

    tree.add_terminal(c, 2, "C1");
    tree.add_terminal(c, 4, "C2");
    tree.add_terminal(c, 6, "C3");

    tree.add_terminal(d, 14, "D1");
    tree.add_terminal(d, 5, "D2");
    tree.add_terminal(d, 2, "D3");
    tree
}

// https://en.wikipedia.org/wiki/Minimax#/media/File:Plminmax.gif
pub fn wikipedia_tree() -> GameTree<&'static str> {
    let mut tree = GameTree::new("");
    let r1 = tree.root();

    let r2a = tree.add_child(r1, "a");
    let r3a1 = tree.add_child(r2a, "r3a1");
    let r3a2 = tree.add_child(r2a, "r3a2");
    let r4a1 = tree.add_child(r3a1, "r4a1");
    let r4a2 = tree.add_child(r3a1, "r4a2");
    let r4a3 = tree.add_child(r3a2, "r4a3");
    add_leaves(&mut tree, r4a1, &[5, 6]);
    add_leaves(&mut tree, r4a2, &[7, 4, 5]);
    add_leaves(&mut tree, r4a3, &[3]);

    let r2b = tree.add_child(r1, "b");
    let r3b1 = tree.add_child(r2b, "r3b1");
    let r3b2 = tree.add_child(r2b, "r3b2");
    let r4b1 = tree.add_child(r3b1, "r4b1");
    let r4b2 = tree.add_child(r3b1, "r4b2");
    let r4b3 = tree.add_child(r3b2, "r4b3");
    add_leaves(&mut tree, r4b1, &[6]);
    add_leaves(&mut tree, r4b2, &[6, 9]);
    add_leaves(&mut tree, r4b3, &[7]);

    let r2c = tree.add_child(r1, "c");
    let r3c1 = tree.add_child(r2c, "r3c1");
    let r3c2 = tree.add_child(r2c, "r3c2");
    let r4c1 = tree.add_child(r3c1, "r4c1");
    let r4c2 = tree.add_child(r3c2, "r4c2");
    let r4c3 = tree.add_child(r3c2, "r4c3");
    add_leaves(&mut tree, r4c1, &[5]);
    add_leaves(&mut tree, r4c2, &[9, 8]);
    add_leaves(&mut tree, r4c3, &[6]);
    tree
}

fn add_leaves(tree: &mut GameTree<&'static str>, parent: NodeId, scores: &[Score]) {
    for &score in scores {
        tree.add_terminal(parent, score, "");
    }
}

// full tree where every internal node has `branching` children and every leaf
// sits at `depth`; leaf scores are handed out in creation order
pub fn uniform_tree<F>(depth: usize, branching: usize, mut leaf_score: F) -> GameTree<usize>
    where F: FnMut(usize) -> Score {
    let mut tree = GameTree::new(0);
    let mut frontier = vec![tree.root()];
    for level in 1..=depth {
        let mut next = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                let label = tree.len();
                if level == depth {
                    let score = leaf_score(label);
                    next.push(tree.add_terminal(parent, score, label));
                } else {
                    next.push(tree.add_child(parent, label));
                }
            }
        }
        frontier = next;
    }
    tree
}
