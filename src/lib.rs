pub mod role;
pub mod game_tree;
pub mod minimax;
pub mod render;
pub mod parser;
pub mod error;
pub mod test_utils;

pub use crate::error::{Error, Result};
pub use crate::game_tree::{GameTree, Node, NodeId, Score};
pub use crate::role::Role;
