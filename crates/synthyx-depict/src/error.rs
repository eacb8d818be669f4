//! Error types for the depiction service.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DepictError>;

#[derive(Debug, Error)]
pub enum DepictError {
    #[error("invalid depiction service URL: {0}")]
    InvalidBaseUrl(String),

    #[error("depiction service rejected SMILES {smiles}")]
    InvalidSmiles { smiles: String },

    #[error("depiction service returned status {status}")]
    DepictFailed { status: u16 },

    #[error("depiction service unreachable: {0}")]
    ServiceUnavailable(#[from] reqwest::Error),

    #[error("depiction service returned SVG without an XML declaration")]
    MalformedSvg,
}
