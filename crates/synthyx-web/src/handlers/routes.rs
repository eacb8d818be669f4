//! Route listing and per-route dependency trees.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use synthyx_data::{build_tree, Route, RouteSummary, RouteTree};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub route: usize,
}

// === API Types ===

#[derive(Debug, Serialize)]
pub struct RouteWithTree {
    #[serde(flatten)]
    pub route: Route,
    pub tree: RouteTree,
}

#[derive(Debug, Serialize)]
pub struct RouteDetailResponse {
    pub data: RouteWithTree,
}

#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    #[serde(rename = "routesList")]
    pub routes_list: Vec<RouteSummary>,
}

// === API Endpoints ===

/// GET /routes?route=N - One route plus its reconstructed molecule tree.
pub async fn route_detail(
    State(state): State<SharedState>,
    Query(query): Query<RouteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let dataset = state.dataset().await;
    let route = dataset.route(query.route)?.clone();

    let root = match &state.root_smiles {
        Some(smiles) => smiles.clone(),
        None => route.final_product()?.smiles.clone(),
    };
    let tree = build_tree(&route, &root)?;

    Ok(Json(RouteDetailResponse {
        data: RouteWithTree { route, tree },
    }))
}

/// GET /allroutes - Summary of every route in the dataset, in dataset order.
pub async fn route_list(State(state): State<SharedState>) -> Json<RouteListResponse> {
    let dataset = state.dataset().await;
    Json(RouteListResponse {
        routes_list: dataset.summaries(),
    })
}
