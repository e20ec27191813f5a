use std::fmt::{self, Display, Write};
use crate::game_tree::{GameTree, NodeId};

impl<D: Display> GameTree<D> {
    /// One line per node, `role data [score]`, starting at `level` spaces of
    /// indentation; every generation is indented two more spaces than its
    /// parent. Unscored nodes show `[]`.
    pub fn render(&self, id: NodeId, level: usize) -> String {
        let mut out = String::new();
        // writing into a String can't fail
        let _ = self.write_node(&mut out, id, level);
        out
    }

    pub fn print(&self, id: NodeId, level: usize) {
        print!("{}", self.render(id, level));
    }

    /// `score: N` for `id`, followed (unless `quiet`) by the best child and
    /// the labels of the principal variation. Unscored nodes report
    /// `score: none`.
    pub fn summary(&self, id: NodeId, quiet: bool) -> String {
        let mut out = match self.score(id) {
            Some(score) => format!("score: {}\n", score),
            None => "score: none\n".to_string(),
        };
        if quiet {
            return out;
        }
        let line = self.principal_variation(id);
        if let Some(&best) = line.first() {
            out.push_str(&format!("best: {}\n", self.data(best)));
        }
        let labels: Vec<String> = line.iter().map(|&v| self.data(v).to_string()).collect();
        out.push_str(&format!("line: {}\n", labels.join(" -> ")));
        out
    }

    fn write_node<W: Write>(&self, w: &mut W, id: NodeId, level: usize) -> fmt::Result {
        let mut stack = vec![(id, level)];
        while let Some((v, level)) = stack.pop() {
            let node = self.node(v);
            let score = node.score().map(|s| s.to_string()).unwrap_or_default();
            writeln!(w, "{:indent$}{} {} [{}]", "", node.role(), node.data, score, indent = level)?;
            for &child in node.children().iter().rev() {
                stack.push((child, level + 2));
            }
        }
        Ok(())
    }
}

impl<D: Display> Display for GameTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root(), 0)
    }
}
