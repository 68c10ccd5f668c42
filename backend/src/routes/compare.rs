use serde::{Deserialize, Serialize};

use crate::models::{Star, StarId};

// =========================================================
// Compare types
// =========================================================

/// Physical property compared side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMetric {
    Distance,
    Mass,
    Radius,
    Temperature,
    Luminosity,
}

impl CompareMetric {
    pub const ALL: [CompareMetric; 5] = [
        CompareMetric::Distance,
        CompareMetric::Mass,
        CompareMetric::Radius,
        CompareMetric::Temperature,
        CompareMetric::Luminosity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CompareMetric::Distance => "Distance (ly)",
            CompareMetric::Mass => "Mass (M☉)",
            CompareMetric::Radius => "Radius (R☉)",
            CompareMetric::Temperature => "Temperature (K)",
            CompareMetric::Luminosity => "Luminosity (L☉)",
        }
    }

    /// Value of this metric for `star`, if known.
    pub fn value_of(&self, star: &Star) -> Option<f64> {
        match self {
            CompareMetric::Distance => Some(star.distance()),
            CompareMetric::Mass => star.mass(),
            CompareMetric::Radius => star.radius_solar,
            CompareMetric::Temperature => star.temperature(),
            CompareMetric::Luminosity => star.luminosity(),
        }
    }
}

/// One metric across every compared star.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRow {
    pub metric: CompareMetric,
    pub label: String,
    /// One entry per compared star, in the order of [`CompareData::stars`].
    pub values: Vec<Option<f64>>,
    pub min_id: Option<StarId>,
    pub max_id: Option<StarId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareData {
    pub stars: Vec<Star>,
    pub rows: Vec<CompareRow>,
    /// Share-link form of the compare set, e.g. `"1,2,3"`.
    pub query: String,
}
