//! Query state for the catalogue views.
//!
//! [`FilterState`] is owned by the caller (view layer or HTTP query); the
//! derivation functions in [`crate::services::catalogue_view`] are pure
//! functions of `(stars, FilterState)`.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::star::StarType;

/// Fixed number of stars per page.
pub const PAGE_SIZE: usize = 50;

pub const DEFAULT_DISTANCE_RANGE: ValueRange = ValueRange::new(0.0, 5000.0);
pub const DEFAULT_TEMPERATURE_RANGE: ValueRange = ValueRange::new(1000.0, 60000.0);
pub const DEFAULT_LUMINOSITY_RANGE: ValueRange = ValueRange::new(0.0, 200000.0);

/// Field the derived list is sorted by (always ascending).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "distance_ly", alias = "distance")]
    Distance,
    #[serde(rename = "temperature_k", alias = "temperature")]
    Temperature,
    #[serde(rename = "luminosity_solar", alias = "luminosity")]
    Luminosity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Distance => "distance_ly",
            SortKey::Temperature => "temperature_k",
            SortKey::Luminosity => "luminosity_solar",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "distance" | "distance_ly" => Ok(Self::Distance),
            "temperature" | "temperature_k" => Ok(Self::Temperature),
            "luminosity" | "luminosity_solar" => Ok(Self::Luminosity),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Inclusive numeric bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends. A NaN bound rejects every value.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// A range takes part in optional-field filtering when at least one bound
    /// is a real number.
    pub fn has_valid_bound(&self) -> bool {
        !self.min.is_nan() || !self.max.is_nan()
    }
}

/// Search, filter, sort and page selection for the catalogue list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_query: String,
    pub type_filters: BTreeSet<StarType>,
    pub distance_range: ValueRange,
    pub temperature_range: ValueRange,
    pub luminosity_range: ValueRange,
    pub sort_by: SortKey,
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            type_filters: BTreeSet::new(),
            distance_range: DEFAULT_DISTANCE_RANGE,
            temperature_range: DEFAULT_TEMPERATURE_RANGE,
            luminosity_range: DEFAULT_LUMINOSITY_RANGE,
            sort_by: SortKey::Name,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    // Changing any filter goes back to the first page; sorting and paging
    // do not.

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.page = 1;
    }

    /// Add the type to the active set, or remove it if already present.
    pub fn toggle_type_filter(&mut self, star_type: StarType) {
        if !self.type_filters.remove(&star_type) {
            self.type_filters.insert(star_type);
        }
        self.page = 1;
    }

    /// Replace the active type set. Repeated types collapse to one entry.
    pub fn set_type_filters(&mut self, types: impl IntoIterator<Item = StarType>) {
        self.type_filters = types.into_iter().collect();
        self.page = 1;
    }

    pub fn set_distance_range(&mut self, range: ValueRange) {
        self.distance_range = range;
        self.page = 1;
    }

    pub fn set_temperature_range(&mut self, range: ValueRange) {
        self.temperature_range = range;
        self.page = 1;
    }

    pub fn set_luminosity_range(&mut self, range: ValueRange) {
        self.luminosity_range = range;
        self.page = 1;
    }

    pub fn set_sort_by(&mut self, key: SortKey) {
        self.sort_by = key;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Restore search, types and ranges to their defaults. The sort key is kept.
    pub fn reset_filters(&mut self) {
        let sort_by = self.sort_by;
        *self = Self {
            sort_by,
            ..Self::default()
        };
    }

    /// True when no search, type or range filter deviates from the defaults.
    pub fn is_default_filters(&self) -> bool {
        let defaults = Self::default();
        self.search_query.trim().is_empty()
            && self.type_filters.is_empty()
            && self.distance_range == defaults.distance_range
            && self.temperature_range == defaults.temperature_range
            && self.luminosity_range == defaults.luminosity_range
    }
}
