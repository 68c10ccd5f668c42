//! Colour helpers for star markers.

use crate::models::StarType;

/// Marker colour for classes outside the palette.
pub const DEFAULT_STAR_COLOR: &str = "#ffffff";

/// Palette colour for a star class.
pub fn star_type_color(star_type: &StarType) -> &'static str {
    match star_type {
        StarType::RedDwarf => "#ff4f58",
        StarType::MainSequenceA | StarType::MainSequenceG => "#bfe8ff",
        StarType::RedSupergiant => "#ff9f43",
        StarType::BlueSupergiant => "#7ad3ff",
        StarType::NeutronStar => "#c6c0ff",
        StarType::Pulsar => "#e0d7ff",
        StarType::Other(_) => DEFAULT_STAR_COLOR,
    }
}

/// Approximate black-body colour for a temperature in kelvin, as `#rrggbb`.
///
/// Piecewise fit over `kelvin / 100`: logarithmic below 6600 K, power law
/// above. Good enough for UI tinting, not for colorimetry.
pub fn temperature_to_color_hex(kelvin: f64) -> String {
    let temp = kelvin / 100.0;

    let (r, g, b) = if temp <= 66.0 {
        let g = (99.4708025861 * temp.ln() - 161.1195681661).clamp(0.0, 255.0);
        let b = if temp <= 19.0 {
            0.0
        } else {
            (138.5177312231 * (temp - 10.0).ln() - 305.0447927307).clamp(0.0, 255.0)
        };
        (255.0, g, b)
    } else {
        let r = (329.698727446 * (temp - 60.0).powf(-0.1332047592)).clamp(0.0, 255.0);
        let g = (288.1221695283 * (temp - 60.0).powf(-0.0755148492)).clamp(0.0, 255.0);
        (r, g, 255.0)
    };

    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}

// NaN (e.g. a non-positive temperature) renders as 0.
fn channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round() as u8
}
