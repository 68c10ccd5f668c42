use serde::{Deserialize, Serialize};

use crate::models::{StarId, StarType};

/// One star on the Hertzsprung-Russell diagram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrPoint {
    pub id: StarId,
    pub name: String,
    #[serde(rename = "type")]
    pub star_type: StarType,
    /// Effective temperature in kelvin.
    pub x: f64,
    /// log10 of the luminosity in solar units.
    pub y: f64,
    pub color: String,
    pub marker_radius: f64,
}

/// Axis bounds; `reversed` puts the low end on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
    pub reversed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrDiagramData {
    pub points: Vec<HrPoint>,
    pub temperature_axis: AxisDomain,
    pub luminosity_axis: AxisDomain,
    /// Filtered stars left out for lack of temperature or luminosity.
    pub skipped_count: usize,
}
