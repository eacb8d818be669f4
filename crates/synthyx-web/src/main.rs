//! Synthyx Web Server
//!
//! Run with: cargo run -p synthyx-web

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use synthyx_data::RouteDataset;
use synthyx_depict::Depictor;
use synthyx_web::config::Config;
use synthyx_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Synthyx Web Server...");

    let config = Config::load()?;

    // Load the dataset once; /admin/reload swaps in a fresh copy.
    let dataset = RouteDataset::load(&config.dataset.path)?;
    let depictor = Depictor::new(
        &config.depict.base_url,
        Duration::from_secs(config.depict.timeout_secs),
    )?;

    let state = AppState::new(
        dataset,
        PathBuf::from(&config.dataset.path),
        depictor,
        config.tree.root_smiles.clone(),
    );
    let app = synthyx_web::router::build_router(state, &config.cors.origins);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
