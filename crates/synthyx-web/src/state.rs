//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use synthyx_data::RouteDataset;
use synthyx_depict::Depictor;

/// Shared state injected into every handler. The dataset is parsed once and
/// swapped wholesale on reload; handlers hold an `Arc` snapshot, so a reload
/// never invalidates an in-flight request.
pub struct AppState {
    dataset: RwLock<Arc<RouteDataset>>,
    pub dataset_path: PathBuf,
    pub depictor: Depictor,
    /// Pinned tree root; `None` derives the root from each route.
    pub root_smiles: Option<String>,
}

impl AppState {
    pub fn new(
        dataset: RouteDataset,
        dataset_path: PathBuf,
        depictor: Depictor,
        root_smiles: Option<String>,
    ) -> Self {
        Self {
            dataset: RwLock::new(Arc::new(dataset)),
            dataset_path,
            depictor,
            root_smiles,
        }
    }

    /// Snapshot of the current dataset.
    pub async fn dataset(&self) -> Arc<RouteDataset> {
        self.dataset.read().await.clone()
    }

    /// Swap in a freshly loaded dataset.
    pub async fn replace_dataset(&self, dataset: RouteDataset) {
        *self.dataset.write().await = Arc::new(dataset);
    }
}

pub type SharedState = Arc<AppState>;
