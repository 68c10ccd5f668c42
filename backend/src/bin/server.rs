//! Galaxy Star Catalogue HTTP Server Binary
//!
//! Loads the configuration and the star catalogue, restores the stored
//! preferences, and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! # Serve data/stars.json with preferences under .gsc/
//! cargo run --bin gsc-server
//!
//! # Another dataset, preferences kept in memory only
//! GSC_CATALOGUE_PATH=/srv/stars.json GSC_STORAGE=memory cargo run --bin gsc-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `GSC_CATALOGUE_PATH`: Catalogue JSON (default: data/stars.json)
//! - `GSC_PREFS_DIR`: Preference directory (default: .gsc)
//! - `GSC_STORAGE`: `file` or `memory` (default: file)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gsc_rust::db::{AppConfig, RepositoryFactory};
use gsc_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Galaxy Star Catalogue server");

    let config = AppConfig::load()?;
    info!(
        "Catalogue: {} ({}), preferences: {} in {}",
        config.catalogue.name,
        config.catalogue.path.display(),
        config.preferences.storage,
        config.preferences.dir.display()
    );

    let repository = RepositoryFactory::from_config(&config)?;
    let state = AppState::from_repository(repository).await?;
    {
        let prefs = state.preferences.read();
        info!(
            "Restored {} favorites and {} annotations",
            prefs.favorites.len(),
            prefs.annotation_count()
        );
    }

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    let addr = listener.local_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
