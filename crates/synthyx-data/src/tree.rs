//! Route-tree builder.
//!
//! Reconstructs a route's molecule dependency tree from its flat reaction
//! list: for a node's SMILES, every reaction targeting it contributes one
//! child per source molecule, and non-building-block children are expanded
//! the same way. Children keep dataset encounter order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};
use crate::models::Route;

/// Attributes carried by non-root tree nodes: how the molecule was made and
/// how many catalog entries it has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    pub catalog_entries_count: usize,
    pub reaction_name: String,
    pub smarts_template: String,
}

/// One node of the reconstructed dependency tree. The root carries no
/// attributes: it is the product, not the output of a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTree {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<NodeAttributes>,
    pub children: Vec<RouteTree>,
}

/// Build the dependency tree of `route` rooted at `root_smiles`.
///
/// Fails with `MoleculeNotFound` when a reaction references a SMILES with
/// no molecule record, and with `ReactionCycle` when a molecule reappears
/// on its own expansion path. A molecule feeding several reactions (a
/// diamond) is expanded at each occurrence.
pub fn build_tree(route: &Route, root_smiles: &str) -> Result<RouteTree> {
    let mut path = HashSet::new();
    let children = expand(route, root_smiles, &mut path)?;
    Ok(RouteTree {
        name: root_smiles.to_string(),
        attributes: None,
        children,
    })
}

fn expand(route: &Route, target: &str, path: &mut HashSet<String>) -> Result<Vec<RouteTree>> {
    if !path.insert(target.to_string()) {
        return Err(DataError::ReactionCycle {
            smiles: target.to_string(),
        });
    }

    let mut children = Vec::new();
    for reaction in route.reactions.iter().filter(|r| r.target == target) {
        for source in &reaction.sources {
            let molecule = route.molecule(source)?;
            let mut node = RouteTree {
                name: source.clone(),
                attributes: Some(NodeAttributes {
                    catalog_entries_count: molecule.catalog_entries.len(),
                    reaction_name: reaction.name.clone(),
                    smarts_template: reaction.smarts_template.clone(),
                }),
                children: Vec::new(),
            };
            if !molecule.is_building_block {
                node.children = expand(route, source, path)?;
            }
            children.push(node);
        }
    }

    path.remove(target);
    Ok(children)
}
