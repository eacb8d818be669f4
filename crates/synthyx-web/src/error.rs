//! API error mapping.
//!
//! Every fault from the dataset or the depiction service surfaces as a
//! structured envelope, `{"error": {"kind", "id", "message"}}`, with a
//! machine-readable kind and the offending identifier, never as an opaque
//! 500 or a success-shaped payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use synthyx_data::DataError;
use synthyx_depict::DepictError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Depict(#[from] DepictError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Data(e) => match e {
                DataError::MoleculeNotFound { .. } => StatusCode::NOT_FOUND,
                DataError::RouteIndexOutOfRange { .. } => StatusCode::NOT_FOUND,
                // Dataset-integrity violations: the caller did nothing wrong.
                DataError::ReactionCycle { .. }
                | DataError::RootUndetermined
                | DataError::Io(_)
                | DataError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Depict(e) => match e {
                DepictError::InvalidSmiles { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                DepictError::ServiceUnavailable(_)
                | DepictError::DepictFailed { .. }
                | DepictError::MalformedSvg => StatusCode::BAD_GATEWAY,
                DepictError::InvalidBaseUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Data(e) => match e {
                DataError::MoleculeNotFound { .. } => "molecule_not_found",
                DataError::RouteIndexOutOfRange { .. } => "route_index_out_of_range",
                DataError::ReactionCycle { .. } => "reaction_cycle",
                DataError::RootUndetermined => "root_undetermined",
                DataError::Io(_) | DataError::Parse(_) => "dataset_unavailable",
            },
            ApiError::Depict(e) => match e {
                DepictError::InvalidSmiles { .. } => "invalid_smiles",
                DepictError::ServiceUnavailable(_) => "depict_unavailable",
                DepictError::DepictFailed { .. } => "depict_failed",
                DepictError::MalformedSvg => "malformed_svg",
                DepictError::InvalidBaseUrl(_) => "depict_misconfigured",
            },
        }
    }

    /// The identifier the fault is about, when there is one.
    fn offending_id(&self) -> Option<String> {
        match self {
            ApiError::Data(DataError::MoleculeNotFound { smiles })
            | ApiError::Data(DataError::ReactionCycle { smiles }) => Some(smiles.clone()),
            ApiError::Data(DataError::RouteIndexOutOfRange { index, .. }) => {
                Some(index.to_string())
            }
            ApiError::Depict(DepictError::InvalidSmiles { smiles }) => Some(smiles.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(kind = self.kind(), error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                kind: self.kind(),
                id: self.offending_id(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
