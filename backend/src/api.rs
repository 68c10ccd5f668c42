//! Public API surface for the catalogue backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::catalogue::CatalogueInfo;
pub use crate::routes::catalogue::CatalogueView;
pub use crate::routes::catalogue::StarDetail;
pub use crate::routes::compare::CompareData;
pub use crate::routes::compare::CompareMetric;
pub use crate::routes::compare::CompareRow;
pub use crate::routes::focus::FocusIntent;
pub use crate::routes::galaxy_map::BucketInfo;
pub use crate::routes::galaxy_map::GalaxyMapData;
pub use crate::routes::galaxy_map::LuminosityBucket;
pub use crate::routes::galaxy_map::MapExtent;
pub use crate::routes::galaxy_map::MapPoint;
pub use crate::routes::hr_diagram::AxisDomain;
pub use crate::routes::hr_diagram::HrDiagramData;
pub use crate::routes::hr_diagram::HrPoint;

pub use crate::algorithms::Position3;
pub use crate::models::{
    Annotation, AnnotationId, FilterState, SortKey, Star, StarId, StarType, ValueRange,
};
