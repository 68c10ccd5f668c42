//! Pure, deterministic building blocks shared by the catalogue services.
//!
//! - [`seeded`]: mulberry32-style pseudo-random sequence keyed by an integer seed
//! - [`position`]: galaxy-map placement of a star from its id and distance
//! - [`color`]: star-type palette and black-body temperature colours

pub mod color;
pub mod position;
pub mod seeded;

pub use color::{star_type_color, temperature_to_color_hex, DEFAULT_STAR_COLOR};
pub use position::{compute_position, Position3};
pub use seeded::{make_generator, SeededGenerator};
