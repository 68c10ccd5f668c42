//! Response types for each catalogue view.
//!
//! Every type here derives `Serialize`/`Deserialize` and is re-exported from
//! [`crate::api`].

pub mod catalogue;
pub mod compare;
pub mod focus;
pub mod galaxy_map;
pub mod hr_diagram;
