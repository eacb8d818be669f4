//! Molecule depiction and per-route molecule details.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use synthyx_data::Molecule;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct DepictQuery {
    pub smiles: String,
}

#[derive(Debug, Serialize)]
pub struct DepictResponse {
    pub data: String,
}

/// GET /molecule?smiles=... - Inline SVG fragment for one molecule. The
/// fragment is pre-rewritten for direct embedding in the frontend's JSX.
pub async fn render_molecule(
    State(state): State<SharedState>,
    Query(query): Query<DepictQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let fragment = state.depictor.depict(&query.smiles).await?;
    Ok(Json(DepictResponse { data: fragment }))
}

#[derive(Debug, Deserialize)]
pub struct MoleculeDetailsQuery {
    pub smiles: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct MoleculeDetailsResponse {
    pub molecule_details: Molecule,
}

/// GET /moleculedetails?smiles=...&index=N - The molecule record for one
/// SMILES within the route at `index`.
pub async fn molecule_details(
    State(state): State<SharedState>,
    Query(query): Query<MoleculeDetailsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let dataset = state.dataset().await;
    let molecule = dataset.route(query.index)?.molecule(&query.smiles)?.clone();
    Ok(Json(MoleculeDetailsResponse {
        molecule_details: molecule,
    }))
}
