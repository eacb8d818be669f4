//! Error types for dataset access and tree construction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("no molecule with SMILES {smiles} in route")]
    MoleculeNotFound { smiles: String },

    #[error("route index {index} out of range (dataset has {len} routes)")]
    RouteIndexOutOfRange { index: usize, len: usize },

    #[error("reaction graph cycle at {smiles}")]
    ReactionCycle { smiles: String },

    #[error("route has no unconsumed product molecule to root the tree at")]
    RootUndetermined,

    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
