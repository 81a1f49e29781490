use crate::DocId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a build pass or startup.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("fetching document {doc_id} failed")]
    Fetch {
        doc_id: DocId,
        #[source]
        source: anyhow::Error,
    },

    #[error("reading {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid index snapshot", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has unsupported snapshot version {version}", path.display())]
    UnsupportedVersion { path: PathBuf, version: u32 },

    #[error("writing {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cursor cannot advance past document {0}")]
    CursorExhausted(DocId),

    #[error("serializing index: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
