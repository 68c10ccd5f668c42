use serde::{Deserialize, Serialize};

use crate::algorithms::Position3;
use crate::models::{StarId, StarType};

/// Brightness class used to size and fade map markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LuminosityBucket {
    VeryDim,
    Dim,
    Medium,
    Bright,
    VeryBright,
}

/// Rendering parameters and population of one luminosity bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketInfo {
    pub bucket: LuminosityBucket,
    pub label: String,
    /// Inclusive lower bound on log10(L), `None` for the open first bucket.
    pub min_log_luminosity: Option<f64>,
    /// Exclusive upper bound on log10(L), `None` for the open last bucket.
    pub max_log_luminosity: Option<f64>,
    pub point_size: f64,
    pub opacity: f64,
    pub count: usize,
}

/// One star marker on the 3D map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapPoint {
    pub id: StarId,
    pub name: String,
    #[serde(rename = "type")]
    pub star_type: StarType,
    pub position: Position3,
    pub color: String,
    pub luminosity: f64,
    pub bucket: LuminosityBucket,
}

/// Axis-aligned bounds of all points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MapExtent {
    pub min: Position3,
    pub max: Position3,
}

/// Galaxy map visualization data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalaxyMapData {
    pub points: Vec<MapPoint>,
    pub buckets: Vec<BucketInfo>,
    pub extent: MapExtent,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_serializes_snake_case() {
        let json = serde_json::to_string(&LuminosityBucket::VeryBright).unwrap();
        assert_eq!(json, "\"very_bright\"");
    }

    #[test]
    fn test_map_point_serializes_type_label() {
        let point = MapPoint {
            id: StarId::new(4),
            name: "Betelgeuse".to_string(),
            star_type: StarType::RedSupergiant,
            position: Position3::new(1.0, 2.0, 3.0),
            color: "#ff9f43".to_string(),
            luminosity: 126000.0,
            bucket: LuminosityBucket::VeryBright,
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["type"], "Red Supergiant");
        assert_eq!(value["position"]["z"], 3.0);
    }
}
