use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use log::debug;
use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::game_tree::{GameTree, NodeId, Score};

// Tree description files are JSON documents of nested nodes, e.g.
//
//   { "data": "root", "children": [
//       { "data": "B", "children": [
//           { "data": "B1", "score": 3 },
//           { "data": "B2", "score": 12 } ] } ] }
//
// Leaves must carry a score, internal nodes and the root must not. `data`
// defaults to an empty label.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct TreeDescription {
    #[serde(default)]
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeDescription>,
}

impl TreeDescription {
    pub fn into_tree(self) -> Result<GameTree<String>> {
        if self.score.is_some() {
            return Err(Error::ScoredRoot);
        }
        let mut tree = GameTree::new(self.data);
        let root = tree.root();
        for child in self.children {
            attach(&mut tree, root, child)?;
        }
        debug!("built tree with {} nodes", tree.len());
        Ok(tree)
    }
}

fn attach(tree: &mut GameTree<String>, parent: NodeId, desc: TreeDescription) -> Result<()> {
    match (desc.score, desc.children.is_empty()) {
        (Some(score), true) => {
            tree.add_terminal(parent, score, desc.data);
        },
        (None, true) => return Err(Error::UnscoredLeaf(desc.data)),
        (Some(_), false) => return Err(Error::ScoredInternalNode(desc.data)),
        (None, false) => {
            let v = tree.add_child(parent, desc.data);
            for child in desc.children {
                attach(tree, v, child)?;
            }
        },
    }
    Ok(())
}

pub fn parse_tree(input: &str) -> Result<GameTree<String>> {
    let desc: TreeDescription = serde_json::from_str(input)?;
    desc.into_tree()
}

pub fn read_tree_file<P: AsRef<Path>>(path: P) -> Result<GameTree<String>> {
    let file = File::open(path.as_ref())?;
    debug!("reading tree from {}", path.as_ref().display());
    let desc: TreeDescription = serde_json::from_reader(BufReader::new(file))?;
    desc.into_tree()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role::*;

    #[test]
    fn test_parse_tree() {
        let tree = parse_tree(r#"{
            "data": "root",
            "children": [
                { "data": "left", "children": [ { "score": 4 }, { "data": "x", "score": -2 } ] },
                { "data": "right", "score": 1 }
            ]
        }"#).unwrap();
        let root = tree.root();
        assert_eq!(tree.data(root), "root");
        assert_eq!(tree.len(), 5);
        let left = tree.children(root)[0];
        let right = tree.children(root)[1];
        assert_eq!(tree.data(left), "left");
        assert_eq!(tree.role(left), Minimizer);
        assert_eq!(tree.score(left), None);
        assert_eq!(tree.score(right), Some(1));
        let leaves: Vec<(&str, Option<Score>)> = tree.children(left).iter()
            .map(|&id| (tree.data(id).as_str(), tree.score(id)))
            .collect();
        assert_eq!(leaves, vec![("", Some(4)), ("x", Some(-2))]);
        assert_eq!(tree.role(tree.children(left)[0]), Maximizer);
    }

    #[test]
    fn test_parse_lone_root() {
        let mut tree = parse_tree("{}").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.evaluate_root(), None);
    }

    #[test]
    fn test_parse_errors() {
        match parse_tree(r#"{ "children": [ { "data": "a" } ] }"#) {
            Err(Error::UnscoredLeaf(label)) => assert_eq!(label, "a"),
            other => panic!("expected UnscoredLeaf, got {:?}", other.map(|t| t.len())),
        }
        match parse_tree(r#"{ "children": [ { "data": "b", "score": 1, "children": [ { "score": 2 } ] } ] }"#) {
            Err(Error::ScoredInternalNode(label)) => assert_eq!(label, "b"),
            other => panic!("expected ScoredInternalNode, got {:?}", other.map(|t| t.len())),
        }
        assert!(matches!(parse_tree(r#"{ "score": 1 }"#), Err(Error::ScoredRoot)));
        assert!(matches!(parse_tree(r#"{ "children": 3 }"#), Err(Error::Json(_))));
        assert!(matches!(parse_tree(r#"{ "value": 3 }"#), Err(Error::Json(_))));
    }

    #[test]
    fn test_read_tree_files() {
        let mut tree = read_tree_file("./test_data/three_branch.json").unwrap();
        assert_eq!(tree.evaluate_root(), Some(3));
        let line: Vec<&str> = tree.principal_variation(tree.root()).iter()
            .map(|&id| tree.data(id).as_str())
            .collect();
        assert_eq!(line, vec!["B", "B1"]);

        let mut tree = read_tree_file("./test_data/wikipedia.json").unwrap();
        assert_eq!(tree.evaluate_root(), Some(6));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(read_tree_file("./test_data/does_not_exist.json"), Err(Error::Io(_))));
    }

    #[test]
    fn test_description_serializes_sparsely() {
        let desc = TreeDescription {
            data: "root".into(),
            score: None,
            children: vec![TreeDescription { data: "a".into(), score: Some(2), children: vec![] }],
        };
        let json = serde_json::to_string(&desc).unwrap();
        assert_eq!(json, r#"{"data":"root","children":[{"data":"a","score":2}]}"#);
    }
}
