//! Domain records for the route dataset.
//!
//! A route is one scored synthesis pathway. Molecules are keyed by their
//! SMILES string, which must be unique within a route; reactions reference
//! molecules only through those strings.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// One candidate synthesis pathway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub score: f64,
    pub molecules: Vec<Molecule>,
    pub reactions: Vec<Reaction>,
}

/// A molecule within a route. `catalog_entries` is an opaque payload from
/// the upstream planner; only its length is ever interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Molecule {
    pub smiles: String,
    #[serde(default)]
    pub catalog_entries: Vec<serde_json::Value>,
    /// Terminal/purchasable input, never decomposed further in the tree.
    #[serde(default)]
    pub is_building_block: bool,
}

/// A reaction edge: `target` is produced from `sources`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub target: String,
    pub sources: Vec<String>,
    pub name: String,
    #[serde(rename = "smartsTemplate")]
    pub smarts_template: String,
}

/// One row of the `/allroutes` listing. `id` is the zero-based position of
/// the route in the dataset array and is the handle used for detail lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    pub id: usize,
    pub score: f64,
    pub building_blocks: usize,
}

impl Route {
    /// Resolve a SMILES string to its molecule record. First exact match
    /// wins; SMILES are unique within a route by dataset contract.
    pub fn molecule(&self, smiles: &str) -> Result<&Molecule> {
        self.molecules
            .iter()
            .find(|m| m.smiles == smiles)
            .ok_or_else(|| DataError::MoleculeNotFound {
                smiles: smiles.to_string(),
            })
    }

    /// Count of building-block molecules in this route.
    pub fn building_block_count(&self) -> usize {
        self.molecules.iter().filter(|m| m.is_building_block).count()
    }

    /// The route's final product: the first molecule (dataset order) that
    /// no reaction consumes as a source. This is the default tree root.
    pub fn final_product(&self) -> Result<&Molecule> {
        self.molecules
            .iter()
            .find(|m| {
                !self
                    .reactions
                    .iter()
                    .any(|r| r.sources.iter().any(|s| s == &m.smiles))
            })
            .ok_or(DataError::RootUndetermined)
    }
}
