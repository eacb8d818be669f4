//! synthyx-depict — 2D molecule depiction via the RDKit sidecar service.
//!
//! Structure parsing and layout are delegated entirely to the sidecar; this
//! crate owns the HTTP client and the rewrite that turns the returned SVG
//! document into an inline fragment the frontend can embed.

pub mod depictor;
pub mod embed;
pub mod error;

pub use depictor::Depictor;
pub use error::{DepictError, Result};
