//! Repository implementations module.
//!
//! - `local`: catalogue held in memory, preferences in a pluggable
//!   [`PreferenceStorage`](crate::db::preferences::PreferenceStorage)
pub mod local;

pub use local::LocalRepository;
