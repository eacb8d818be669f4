//! synthyx-data — Typed route dataset and the route-tree builder.
//!
//! Holds the domain records (routes, molecules, reactions), the dataset
//! store loaded from `routes.json`, and the recursive builder that turns a
//! route's flat reaction list into a molecule dependency tree.

pub mod error;
pub mod models;
pub mod store;
pub mod tree;

pub use error::{DataError, Result};
pub use models::{Molecule, Reaction, Route, RouteSummary};
pub use store::RouteDataset;
pub use tree::{build_tree, NodeAttributes, RouteTree};
