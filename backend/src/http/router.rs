//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Request bodies are annotation texts; nothing legitimate comes close.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Catalogue
        .route("/catalogue", get(handlers::get_catalogue_info))
        .route("/stars", get(handlers::list_stars))
        .route("/stars/random", get(handlers::get_random_star))
        .route("/stars/{id}", get(handlers::get_star))
        // Visualization endpoints
        .route("/galaxy-map", get(handlers::get_galaxy_map))
        .route("/hr-diagram", get(handlers::get_hr_diagram))
        // Favorites
        .route("/favorites", get(handlers::list_favorites))
        .route("/favorites/{id}/toggle", post(handlers::toggle_favorite))
        // Annotations
        .route(
            "/stars/{id}/annotations",
            get(handlers::list_annotations).post(handlers::add_annotation),
        )
        .route(
            "/stars/{id}/annotations/{annotation_id}",
            put(handlers::update_annotation).delete(handlers::delete_annotation),
        )
        // Compare
        .route(
            "/compare",
            get(handlers::get_compare).delete(handlers::clear_compare),
        )
        .route(
            "/compare/{id}",
            post(handlers::add_to_compare).delete(handlers::remove_from_compare),
        )
        // Jump to map
        .route("/stars/{id}/focus", post(handlers::focus_star))
        .route("/map/focus", get(handlers::take_focus))
        .route("/map/focus/stream", get(handlers::stream_focus));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
