//! Axum router — maps all URL paths to handlers.

use axum::http::HeaderValue;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::handlers::{
    molecules::{molecule_details, render_molecule},
    routes::{route_detail, route_list},
    system::{read_root, reload_dataset},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/", get(read_root))
        .route("/molecule", get(render_molecule))
        .route("/routes", get(route_detail))
        .route("/allroutes", get(route_list))
        .route("/moleculedetails", get(molecule_details))
        .route("/admin/reload", post(reload_dataset))

        // Middleware
        .layer(cors_layer(allowed_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Credentialed CORS over the fixed origin allow-list. Wildcards cannot be
/// combined with credentials, so methods and headers mirror the request.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
