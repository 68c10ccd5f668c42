use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algorithms::Position3;
use crate::models::{Annotation, Star};

/// One page of the filtered, sorted catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueView {
    pub items: Vec<Star>,
    /// Page actually served, clamped to `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
    /// Number of stars matching the filters, across all pages.
    pub total_count: usize,
    pub page_size: usize,
}

/// Summary of the loaded catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueInfo {
    pub name: String,
    pub star_count: usize,
    /// SHA-256 of the raw dataset, empty when nothing was loaded.
    pub checksum: String,
    /// Star count per type label.
    pub type_counts: BTreeMap<String, usize>,
}

/// Everything the detail panel shows for one star.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarDetail {
    pub star: Star,
    pub position: Position3,
    pub type_color: String,
    pub temperature_color: Option<String>,
    pub is_favorite: bool,
    pub annotations: Vec<Annotation>,
}
