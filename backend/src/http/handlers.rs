//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. View derivation runs on the blocking pool.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    AnnotationListResponse, AnnotationRequest, CatalogueInfo, CatalogueView, CompareData,
    CompareQuery, CompareSetResponse, FavoriteToggleResponse, FavoritesResponse, FocusIntent,
    GalaxyMapData, HealthResponse, HrDiagramData, StarDetail, StarQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::algorithms::make_generator;
use crate::db::repository::CatalogueRepository;
use crate::models::{Annotation, AnnotationId, FilterState, Star, StarId};
use crate::services::{
    catalogue_view, compute_compare_data, compute_galaxy_map_data, compute_hr_diagram_data,
    jump_to_map, CompareSet,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Interval at which the focus stream polls the channel.
const FOCUS_POLL_INTERVAL: Duration = Duration::from_millis(200);

fn parse_filters(query: &StarQuery) -> Result<FilterState, AppError> {
    query.to_filter_state().map_err(AppError::BadRequest)
}

async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

fn compare_response(set: &CompareSet, changed: bool) -> CompareSetResponse {
    CompareSetResponse {
        ids: set.ids().to_vec(),
        query: set.to_query(),
        changed,
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let catalogue = match state.repository.health_check().await {
        Ok(true) => "ready".to_string(),
        Ok(false) => "unavailable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        catalogue,
    }))
}

// =============================================================================
// Catalogue
// =============================================================================

/// GET /v1/catalogue
pub async fn get_catalogue_info(State(state): State<AppState>) -> HandlerResult<CatalogueInfo> {
    Ok(Json(state.repository.catalogue_info().await?))
}

/// GET /v1/stars
///
/// One page of the filtered, sorted catalogue.
pub async fn list_stars(
    State(state): State<AppState>,
    Query(query): Query<StarQuery>,
) -> HandlerResult<CatalogueView> {
    let filters = parse_filters(&query)?;
    let stars = state.repository.list_stars().await?;
    let view = run_blocking(move || catalogue_view::derive_view(&stars, &filters)).await?;
    Ok(Json(view))
}

/// GET /v1/stars/{id}
pub async fn get_star(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<StarDetail> {
    let star = state.repository.get_star(StarId::new(id)).await?;
    let detail = catalogue_view::star_detail(star, &state.preferences.read());
    Ok(Json(detail))
}

/// GET /v1/stars/random
///
/// A random star from the filtered set. Pass `seed` for a reproducible pick.
pub async fn get_random_star(
    State(state): State<AppState>,
    Query(query): Query<StarQuery>,
) -> HandlerResult<Star> {
    let filters = parse_filters(&query)?;
    let seed = query
        .seed
        .unwrap_or_else(|| i64::from(chrono::Utc::now().timestamp_subsec_nanos()));
    let stars = state.repository.list_stars().await?;

    let picked = run_blocking(move || {
        let mut rng = make_generator(seed);
        catalogue_view::random_star(&stars, &filters, &mut rng)
    })
    .await?;

    picked
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No star matches the current filters".to_string()))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/galaxy-map
pub async fn get_galaxy_map(
    State(state): State<AppState>,
    Query(query): Query<StarQuery>,
) -> HandlerResult<GalaxyMapData> {
    let filters = parse_filters(&query)?;
    let stars = state.repository.list_stars().await?;
    let data = run_blocking(move || {
        compute_galaxy_map_data(&catalogue_view::filtered_stars(&stars, &filters))
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/hr-diagram
pub async fn get_hr_diagram(
    State(state): State<AppState>,
    Query(query): Query<StarQuery>,
) -> HandlerResult<HrDiagramData> {
    let filters = parse_filters(&query)?;
    let stars = state.repository.list_stars().await?;
    let data = run_blocking(move || {
        compute_hr_diagram_data(&catalogue_view::filtered_stars(&stars, &filters))
    })
    .await?;
    Ok(Json(data))
}

// =============================================================================
// Favorites
// =============================================================================

/// GET /v1/favorites
///
/// Favorites among the stars passing the query filters.
pub async fn list_favorites(
    State(state): State<AppState>,
    Query(query): Query<StarQuery>,
) -> HandlerResult<FavoritesResponse> {
    let filters = parse_filters(&query)?;
    let stars = state.repository.list_stars().await?;
    let visible = catalogue_view::filtered_stars(&stars, &filters);

    let prefs = state.preferences.read();
    Ok(Json(FavoritesResponse {
        favorites: prefs.favorites.clone(),
        stars: prefs.favorite_stars(&visible),
    }))
}

/// POST /v1/favorites/{id}/toggle
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<FavoriteToggleResponse> {
    let star_id = state.repository.get_star(StarId::new(id)).await?.id;
    let is_favorite = state
        .update_preferences(|prefs| prefs.toggle_favorite(star_id))
        .await;
    Ok(Json(FavoriteToggleResponse {
        star_id,
        is_favorite,
    }))
}

// =============================================================================
// Annotations
// =============================================================================

/// GET /v1/stars/{id}/annotations
pub async fn list_annotations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<AnnotationListResponse> {
    let star_id = state.repository.get_star(StarId::new(id)).await?.id;
    let annotations = state.preferences.read().annotations_for(star_id).to_vec();
    Ok(Json(AnnotationListResponse {
        star_id,
        annotations,
    }))
}

/// POST /v1/stars/{id}/annotations
pub async fn add_annotation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<AnnotationRequest>,
) -> Result<(StatusCode, Json<Annotation>), AppError> {
    let star_id = state.repository.get_star(StarId::new(id)).await?.id;
    let created = state
        .update_preferences(|prefs| prefs.add_annotation(star_id, &request.text))
        .await
        .ok_or_else(|| AppError::BadRequest("Annotation text must not be empty".to_string()))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /v1/stars/{id}/annotations/{annotation_id}
pub async fn update_annotation(
    State(state): State<AppState>,
    Path((id, annotation_id)): Path<(i64, AnnotationId)>,
    Json(request): Json<AnnotationRequest>,
) -> HandlerResult<Annotation> {
    let star_id = StarId::new(id);
    state
        .update_preferences(|prefs| prefs.update_annotation(star_id, annotation_id, &request.text))
        .await
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Annotation {} not found on star {}",
                annotation_id, star_id
            ))
        })
}

/// DELETE /v1/stars/{id}/annotations/{annotation_id}
pub async fn delete_annotation(
    State(state): State<AppState>,
    Path((id, annotation_id)): Path<(i64, AnnotationId)>,
) -> Result<StatusCode, AppError> {
    let star_id = StarId::new(id);
    let removed = state
        .update_preferences(|prefs| prefs.delete_annotation(star_id, annotation_id))
        .await;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!(
            "Annotation {} not found on star {}",
            annotation_id, star_id
        )))
    }
}

// =============================================================================
// Compare
// =============================================================================

/// GET /v1/compare
///
/// With `cmp=1,2,3` the set is first replaced from the share link.
pub async fn get_compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> HandlerResult<CompareData> {
    let set = {
        let mut compare = state.compare.lock();
        if let Some(cmp) = &query.cmp {
            *compare = CompareSet::from_query(cmp);
        }
        compare.clone()
    };
    let stars = state.repository.list_stars().await?;
    Ok(Json(compute_compare_data(&stars, &set)))
}

/// POST /v1/compare/{id}
pub async fn add_to_compare(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<CompareSetResponse> {
    let star_id = state.repository.get_star(StarId::new(id)).await?.id;
    let mut compare = state.compare.lock();
    let changed = compare.add(star_id);
    Ok(Json(compare_response(&compare, changed)))
}

/// DELETE /v1/compare/{id}
pub async fn remove_from_compare(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<CompareSetResponse> {
    let mut compare = state.compare.lock();
    let changed = compare.remove(StarId::new(id));
    Ok(Json(compare_response(&compare, changed)))
}

/// DELETE /v1/compare
pub async fn clear_compare(State(state): State<AppState>) -> HandlerResult<CompareSetResponse> {
    let mut compare = state.compare.lock();
    let changed = !compare.is_empty();
    compare.clear();
    Ok(Json(compare_response(&compare, changed)))
}

// =============================================================================
// Jump to map
// =============================================================================

/// POST /v1/stars/{id}/focus
pub async fn focus_star(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<FocusIntent>), AppError> {
    let star = state.repository.get_star(StarId::new(id)).await?;
    let intent = jump_to_map(&star);
    state.focus.publish(intent);
    Ok((StatusCode::ACCEPTED, Json(intent)))
}

/// GET /v1/map/focus
///
/// Consume the pending focus intent; `null` when there is none.
pub async fn take_focus(State(state): State<AppState>) -> HandlerResult<Option<FocusIntent>> {
    Ok(Json(state.focus.take()))
}

/// GET /v1/map/focus/stream
///
/// Stream focus intents via Server-Sent Events (SSE), each delivered once.
pub async fn stream_focus(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let focus = state.focus.clone();
    let stream = async_stream::stream! {
        loop {
            if let Some(intent) = focus.take() {
                let data = serde_json::to_string(&intent).unwrap_or_default();
                yield Ok(Event::default().event("focus").data(data));
            }
            tokio::time::sleep(FOCUS_POLL_INTERVAL).await;
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    )
}
