//! Dataset store — the JSON route array, parsed once and shared.
//!
//! The file is read at process start (or on an explicit reload) rather than
//! per request; routes are immutable once loaded, so the parsed dataset can
//! be handed out freely.

use std::path::Path;

use tracing::info;

use crate::error::{DataError, Result};
use crate::models::{Route, RouteSummary};

/// A loaded, read-only route dataset.
#[derive(Debug, Clone)]
pub struct RouteDataset {
    routes: Vec<Route>,
}

impl RouteDataset {
    /// Load the dataset from a JSON file containing an array of routes.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;
        info!(routes = dataset.len(), path = %path.display(), "route dataset loaded");
        Ok(dataset)
    }

    /// Parse a dataset from an in-memory JSON array.
    pub fn from_json(json: &str) -> Result<Self> {
        let routes: Vec<Route> = serde_json::from_str(json)?;
        Ok(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Fetch a route by its positional index.
    pub fn route(&self, index: usize) -> Result<&Route> {
        self.routes
            .get(index)
            .ok_or(DataError::RouteIndexOutOfRange {
                index,
                len: self.routes.len(),
            })
    }

    /// One summary per route, in dataset order. The `id` is the positional
    /// index; reordering the dataset file changes every id.
    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.routes
            .iter()
            .enumerate()
            .map(|(id, route)| RouteSummary {
                id,
                score: route.score,
                building_blocks: route.building_block_count(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATASET: &str = r#"[
        {
            "score": 0.994,
            "molecules": [
                {"smiles": "A", "catalog_entries": [], "is_building_block": false},
                {"smiles": "B", "catalog_entries": [{"vendor": "acme"}], "is_building_block": true}
            ],
            "reactions": [
                {"target": "A", "sources": ["B"], "name": "rxn1", "smartsTemplate": "T1"}
            ]
        },
        {
            "score": 0.412,
            "molecules": [
                {"smiles": "X", "catalog_entries": [], "is_building_block": true}
            ],
            "reactions": []
        }
    ]"#;

    #[test]
    fn test_summaries_cover_dataset_in_order() {
        let dataset = RouteDataset::from_json(DATASET).unwrap();
        let summaries = dataset.summaries();
        assert_eq!(summaries.len(), dataset.len());
        let ids: Vec<usize> = summaries.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_summary_counts_building_blocks() {
        let dataset = RouteDataset::from_json(DATASET).unwrap();
        let summaries = dataset.summaries();
        assert_eq!(summaries[0].building_blocks, 1);
        assert_eq!(summaries[1].building_blocks, 1);
        assert!((summaries[0].score - 0.994).abs() < f64::EPSILON);
    }

    #[test]
    fn test_route_index_out_of_range() {
        let dataset = RouteDataset::from_json(DATASET).unwrap();
        let err = dataset.route(2).unwrap_err();
        assert!(matches!(
            err,
            DataError::RouteIndexOutOfRange { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();
        let dataset = RouteDataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.route(0).unwrap().molecules.len(), 2);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(matches!(
            RouteDataset::load(file.path()),
            Err(DataError::Parse(_))
        ));
    }
}
