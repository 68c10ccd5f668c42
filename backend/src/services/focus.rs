//! "Jump to map" hand-off between the catalogue views and the galaxy map.
//!
//! The producer publishes a [`FocusIntent`]; the map consumes it exactly once.
//! Only the latest intent is kept.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::FocusIntent;
use crate::models::Star;

/// Camera offset from the focused star, in map units.
pub const CAMERA_OFFSET: (f64, f64, f64) = (0.0, 10.0, 60.0);

/// Build the focus intent for `star`.
pub fn jump_to_map(star: &Star) -> FocusIntent {
    let position = star.position();
    let (dx, dy, dz) = CAMERA_OFFSET;
    FocusIntent {
        star_id: star.id,
        position,
        camera_position: position.offset(dx, dy, dz),
    }
}

/// Single-slot, one-shot focus queue. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct FocusChannel {
    slot: Arc<Mutex<Option<FocusIntent>>>,
}

impl FocusChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `intent`, replacing any pending one.
    pub fn publish(&self, intent: FocusIntent) {
        let replaced = self.slot.lock().replace(intent);
        if let Some(old) = replaced {
            log::debug!(
                "focus on star {} replaced pending star {}",
                intent.star_id,
                old.star_id
            );
        }
    }

    /// Return and clear the pending intent.
    pub fn take(&self) -> Option<FocusIntent> {
        self.slot.lock().take()
    }

    pub fn peek(&self) -> Option<FocusIntent> {
        *self.slot.lock()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.lock().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::compute_position;
    use crate::models::StarType;

    #[test]
    fn test_jump_to_map_offsets_camera() {
        let star = Star::new(42, "Test", StarType::Pulsar, 100.0);
        let intent = jump_to_map(&star);
        let position = compute_position(42, 100.0);

        assert_eq!(intent.position, position);
        assert_eq!(intent.camera_position.x, position.x);
        assert_eq!(intent.camera_position.y, position.y + 10.0);
        assert_eq!(intent.camera_position.z, position.z + 60.0);
    }

    #[test]
    fn test_take_is_one_shot() {
        let channel = FocusChannel::new();
        assert!(channel.take().is_none());

        let star = Star::new(1, "A", StarType::RedDwarf, 4.2);
        channel.publish(jump_to_map(&star));
        assert!(channel.is_pending());
        assert_eq!(channel.peek().map(|i| i.star_id), Some(star.id));
        assert_eq!(channel.take().map(|i| i.star_id), Some(star.id));
        assert!(channel.take().is_none());
    }

    #[test]
    fn test_publish_overwrites_pending_intent() {
        let channel = FocusChannel::new();
        let first = Star::new(1, "A", StarType::RedDwarf, 4.2);
        let second = Star::new(2, "B", StarType::RedDwarf, 8.6);

        channel.publish(jump_to_map(&first));
        channel.publish(jump_to_map(&second));
        assert_eq!(channel.take().map(|i| i.star_id), Some(second.id));
        assert!(channel.take().is_none());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let producer = FocusChannel::new();
        let consumer = producer.clone();
        producer.publish(jump_to_map(&Star::new(9, "C", StarType::Pulsar, 1.0)));
        assert!(consumer.take().is_some());
        assert!(!producer.is_pending());
    }
}
