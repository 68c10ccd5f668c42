//! Free-text notes attached to a star.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Annotation identifier (random v4 UUID, serialized as a string).
pub type AnnotationId = Uuid;

/// A note a user attached to a star.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Annotation {
    /// New annotation stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_annotations_get_distinct_ids() {
        let a = Annotation::new("binary companion?");
        let b = Annotation::new("binary companion?");
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_annotation_json_round_trip() {
        let original = Annotation::new("flare observed");
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Annotation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
