//! Liveness and dataset administration.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use synthyx_data::RouteDataset;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET / - Liveness check.
pub async fn read_root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Synthyx route explorer.",
    })
}

#[derive(Serialize)]
pub struct ReloadResponse {
    pub message: &'static str,
    pub routes: usize,
}

/// POST /admin/reload - Re-read the dataset file and swap it in. In-flight
/// requests keep their snapshot of the old dataset.
pub async fn reload_dataset(
    State(state): State<SharedState>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let dataset = RouteDataset::load(&state.dataset_path).map_err(|e| {
        warn!(path = %state.dataset_path.display(), error = %e, "dataset reload failed");
        e
    })?;
    let routes = dataset.len();
    state.replace_dataset(dataset).await;
    info!(routes, "dataset reloaded");
    Ok(Json(ReloadResponse {
        message: "dataset reloaded",
        routes,
    }))
}
