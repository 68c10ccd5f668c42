//! Star catalogue records.
//!
//! A [`Star`] mirrors one entry of the `stars.json` dataset. Records are
//! immutable once loaded; every view of the catalogue is derived from the
//! full collection without mutating it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithms::position::{compute_position, Position3};

crate::define_id_type!(i64, StarId);

/// Spectral/type classification of a star.
///
/// The catalogue uses a fixed set of labels. Labels outside that set are kept
/// verbatim in [`StarType::Other`] so that a dataset with a new class still
/// loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StarType {
    RedDwarf,
    MainSequenceA,
    MainSequenceG,
    RedSupergiant,
    BlueSupergiant,
    NeutronStar,
    Pulsar,
    Other(String),
}

impl StarType {
    /// All known (non-`Other`) classes, in legend order.
    pub const KNOWN: [StarType; 7] = [
        StarType::RedDwarf,
        StarType::MainSequenceA,
        StarType::MainSequenceG,
        StarType::RedSupergiant,
        StarType::BlueSupergiant,
        StarType::NeutronStar,
        StarType::Pulsar,
    ];

    /// Catalogue label of this class.
    pub fn label(&self) -> &str {
        match self {
            StarType::RedDwarf => "Red Dwarf",
            StarType::MainSequenceA => "Main Sequence (A-type)",
            StarType::MainSequenceG => "Main Sequence (G-type)",
            StarType::RedSupergiant => "Red Supergiant",
            StarType::BlueSupergiant => "Blue Supergiant",
            StarType::NeutronStar => "Neutron Star",
            StarType::Pulsar => "Pulsar",
            StarType::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, StarType::Other(_))
    }
}

impl From<&str> for StarType {
    fn from(label: &str) -> Self {
        match label {
            "Red Dwarf" => StarType::RedDwarf,
            "Main Sequence (A-type)" => StarType::MainSequenceA,
            "Main Sequence (G-type)" => StarType::MainSequenceG,
            "Red Supergiant" => StarType::RedSupergiant,
            "Blue Supergiant" => StarType::BlueSupergiant,
            "Neutron Star" => StarType::NeutronStar,
            "Pulsar" => StarType::Pulsar,
            other => StarType::Other(other.to_string()),
        }
    }
}

impl From<String> for StarType {
    fn from(label: String) -> Self {
        StarType::from(label.as_str())
    }
}

impl From<StarType> for String {
    fn from(star_type: StarType) -> Self {
        match star_type {
            StarType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_distance() -> qtty::LightYears {
    qtty::LightYears::new(0.0)
}

/// A single catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub id: StarId,
    pub name: String,
    #[serde(rename = "type")]
    pub star_type: StarType,
    #[serde(default = "default_distance")]
    pub distance_ly: qtty::LightYears,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_solar: Option<qtty::SolarMasses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_solar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_km: Option<qtty::Kilometers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub luminosity_solar: Option<qtty::SolarLuminosities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Star {
    /// Minimal record; optional physical properties are left unset.
    pub fn new(id: i64, name: impl Into<String>, star_type: StarType, distance_ly: f64) -> Self {
        Self {
            id: StarId::new(id),
            name: name.into(),
            star_type,
            distance_ly: qtty::LightYears::new(distance_ly),
            mass_solar: None,
            radius_solar: None,
            radius_km: None,
            temperature_k: None,
            luminosity_solar: None,
            constellation: None,
            description: None,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance_ly.value()
    }

    pub fn temperature(&self) -> Option<f64> {
        self.temperature_k
    }

    pub fn luminosity(&self) -> Option<f64> {
        self.luminosity_solar.map(|l| l.value())
    }

    pub fn mass(&self) -> Option<f64> {
        self.mass_solar.map(|m| m.value())
    }

    /// Deterministic galaxy-map placement of this star.
    pub fn position(&self) -> Position3 {
        compute_position(self.id.value(), self.distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_type_round_trips_known_labels() {
        for known in StarType::KNOWN {
            let label = known.label().to_string();
            assert_eq!(StarType::from(label.as_str()), known);
            assert!(known.is_known());
        }
    }

    #[test]
    fn test_unknown_star_type_is_preserved() {
        let star_type = StarType::from("White Dwarf");
        assert_eq!(star_type, StarType::Other("White Dwarf".to_string()));
        assert_eq!(String::from(star_type), "White Dwarf");
    }

    #[test]
    fn test_star_deserializes_catalogue_shape() {
        let json = r#"{
            "id": 7,
            "name": "Proxima Centauri",
            "type": "Red Dwarf",
            "distance_ly": 4.24,
            "mass_solar": 0.12,
            "temperature_k": 3042,
            "luminosity_solar": 0.0017,
            "constellation": "Centaurus"
        }"#;
        let star: Star = serde_json::from_str(json).unwrap();

        assert_eq!(star.id, StarId::new(7));
        assert_eq!(star.star_type, StarType::RedDwarf);
        assert_eq!(star.distance(), 4.24);
        assert_eq!(star.temperature(), Some(3042.0));
        assert_eq!(star.luminosity(), Some(0.0017));
        assert!(star.radius_solar.is_none());
        assert!(star.description.is_none());
    }

    #[test]
    fn test_missing_distance_defaults_to_zero() {
        let star: Star =
            serde_json::from_str(r#"{"id": 1, "name": "Nomad", "type": "Pulsar"}"#).unwrap();
        assert_eq!(star.distance(), 0.0);
    }

    #[test]
    fn test_star_serializes_type_label() {
        let star = Star::new(3, "Vega", StarType::MainSequenceA, 25.0);
        let value = serde_json::to_value(&star).unwrap();
        assert_eq!(value["type"], "Main Sequence (A-type)");
        assert!(value.get("mass_solar").is_none());
    }
}
