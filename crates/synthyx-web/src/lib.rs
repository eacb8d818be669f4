//! synthyx-web — HTTP facade for the Synthyx route explorer.
//! Serves:
//!   - route summary listing
//!   - per-route molecule dependency trees
//!   - molecule detail lookup
//!   - 2D molecule depictions (inline SVG fragments)
//!   - liveness and dataset reload

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
