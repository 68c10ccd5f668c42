use serde::{Deserialize, Serialize};

use crate::algorithms::Position3;
use crate::models::StarId;

/// Request to move the galaxy-map camera onto a star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusIntent {
    pub star_id: StarId,
    pub position: Position3,
    pub camera_position: Position3,
}
