//! Galaxy-map placement of catalogue stars.
//!
//! Each star is placed on a flattened disc from three draws of a generator
//! seeded with its id, so the same star lands on the same spot in every view
//! and in the focus target computed for "jump to map".

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::seeded::SeededGenerator;

/// Upper bound of the generator-driven radius jitter.
pub const RADIUS_JITTER: f64 = 200.0;
/// Light-years to map units for the distance contribution to the radius.
pub const DISTANCE_SCALE: f64 = 0.02;
/// Full height of the disc; the vertical offset spans `[-20, 20]`.
pub const DISC_THICKNESS: f64 = 40.0;

/// A point in map space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Distance from the map origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Place a star from its id and catalogue distance.
///
/// Draw order is fixed: radius jitter, angle, vertical offset. The vertical
/// draw is published as `y`; the published `z` is the sine term of the disc
/// angle. Existing map layouts depend on exactly this arrangement.
pub fn compute_position(id: i64, distance_ly: f64) -> Position3 {
    let mut rng = SeededGenerator::new(id);
    let r = rng.next_f64() * RADIUS_JITTER + distance_ly * DISTANCE_SCALE;
    let theta = rng.next_f64() * PI * 2.0;
    let vertical = (rng.next_f64() - 0.5) * DISC_THICKNESS;

    Position3 {
        x: theta.cos() * r,
        y: vertical,
        z: theta.sin() * r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_position_for_id_42() {
        let pos = compute_position(42, 100.0);
        assert_close(pos.x, -115.82648492319946);
        assert_close(pos.y, 14.098631739616394);
        assert_close(pos.z, 39.01457695236341);
    }

    #[test]
    fn test_position_is_bit_identical_across_calls() {
        let a = compute_position(1234, 87.5);
        let b = compute_position(1234, 87.5);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    #[test]
    fn test_distance_only_scales_radius() {
        let near = compute_position(9, 0.0);
        let far = compute_position(9, 1000.0);

        // Same seed: the vertical offset and the angle are unchanged.
        assert_eq!(near.y, far.y);
        let near_r = near.x.hypot(near.z);
        let far_r = far.x.hypot(far.z);
        assert_close(far_r - near_r, 1000.0 * DISTANCE_SCALE);
        assert_close(near.z.atan2(near.x), far.z.atan2(far.x));
    }

    #[test]
    fn test_vertical_offset_stays_within_disc() {
        for id in 0..500 {
            let pos = compute_position(id, 10.0);
            assert!(pos.y >= -20.0 && pos.y <= 20.0);
        }
    }

    #[test]
    fn test_offset_and_norm() {
        let p = Position3::new(3.0, 0.0, 4.0);
        assert_eq!(p.norm(), 5.0);
        assert_eq!(p.offset(0.0, 10.0, 60.0), Position3::new(3.0, 10.0, 64.0));
    }
}
