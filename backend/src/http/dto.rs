//! Data Transfer Objects for the HTTP API.
//!
//! View DTOs are re-exported from the routes module since they already
//! derive Serialize/Deserialize. This file holds the request/response
//! shapes that only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Catalogue
    CatalogueInfo, CatalogueView, StarDetail,
    // Compare
    CompareData, CompareMetric, CompareRow,
    // Focus
    FocusIntent,
    // Galaxy map
    BucketInfo, GalaxyMapData, LuminosityBucket, MapExtent, MapPoint,
    // HR diagram
    AxisDomain, HrDiagramData, HrPoint,
};
use crate::models::{
    Annotation, FilterState, SortKey, Star, StarId, StarType, ValueRange,
};

/// Filter, sort and page selection as query parameters.
///
/// `types` is a comma-separated list of type labels. A range bound that is
/// omitted keeps its default; `NaN` disables the temperature or luminosity
/// filter.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StarQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub dist_min: Option<f64>,
    #[serde(default)]
    pub dist_max: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub lum_min: Option<f64>,
    #[serde(default)]
    pub lum_max: Option<f64>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    /// Seed for `/v1/stars/random`; ignored elsewhere.
    #[serde(default)]
    pub seed: Option<i64>,
}

fn range_with(defaults: ValueRange, min: Option<f64>, max: Option<f64>) -> ValueRange {
    ValueRange::new(min.unwrap_or(defaults.min), max.unwrap_or(defaults.max))
}

impl StarQuery {
    /// Build the filter state; fails only on an unknown sort key.
    pub fn to_filter_state(&self) -> Result<FilterState, String> {
        let mut filters = FilterState::default();
        if let Some(q) = &self.q {
            filters.set_search_query(q.as_str());
        }
        if let Some(types) = &self.types {
            filters.set_type_filters(
                types
                    .split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(StarType::from),
            );
        }
        filters.set_distance_range(range_with(filters.distance_range, self.dist_min, self.dist_max));
        filters.set_temperature_range(range_with(
            filters.temperature_range,
            self.temp_min,
            self.temp_max,
        ));
        filters.set_luminosity_range(range_with(
            filters.luminosity_range,
            self.lum_min,
            self.lum_max,
        ));
        if let Some(sort) = &self.sort {
            filters.set_sort_by(sort.parse::<SortKey>()?);
        }
        if let Some(page) = self.page {
            filters.set_page(page);
        }
        Ok(filters)
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Catalogue repository status
    pub catalogue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesResponse {
    /// Every favorite id, in the order added
    pub favorites: Vec<StarId>,
    /// Favorites passing the query filters, in view order
    pub stars: Vec<Star>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleResponse {
    pub star_id: StarId,
    pub is_favorite: bool,
}

/// Body of annotation create/update requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationListResponse {
    pub star_id: StarId,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareSetResponse {
    pub ids: Vec<StarId>,
    /// Share-link form, e.g. `"1,2,3"`
    pub query: String,
    /// Whether the last request changed the set
    pub changed: bool,
}

/// Query of `GET /v1/compare`; `cmp` hydrates the set from a share link.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompareQuery {
    #[serde(default)]
    pub cmp: Option<String>,
}
