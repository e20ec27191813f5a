use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("couldn't read tree file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tree description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("leaf {0:?} has no score")]
    UnscoredLeaf(String),
    #[error("node {0:?} has both children and a score")]
    ScoredInternalNode(String),
    #[error("the root node can't carry a score")]
    ScoredRoot,
}

pub type Result<T> = std::result::Result<T, Error>;
