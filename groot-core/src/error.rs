use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Cannot read {path}: {source}")]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt commit {hash}: {reason}")]
    CorruptCommit { hash: String, reason: String },

    #[error("Nothing to commit")]
    NothingToCommit,

    #[error("Not a groot repository: {0}")]
    NotARepository(PathBuf),
}
