//! Service layer for catalogue views.
//!
//! Services sit between the repository and the HTTP handlers. Each one has a
//! pure `compute_*` function over a star slice (unit tested in isolation) and,
//! where a view is filtered, an async `get_*` wrapper that pulls the
//! catalogue from a [`CatalogueRepository`](crate::db::repository::CatalogueRepository).

pub mod catalogue_view;

pub mod compare;

pub mod focus;

pub mod galaxy_map;

pub mod hr_diagram;

pub use catalogue_view::{derive_view, filtered_stars, get_catalogue_view, random_star, star_detail};
pub use compare::{compute_compare_data, CompareSet, MAX_COMPARE};
pub use focus::{jump_to_map, FocusChannel};
pub use galaxy_map::{compute_galaxy_map_data, get_galaxy_map_data};
pub use hr_diagram::{compute_hr_diagram_data, get_hr_diagram_data};
