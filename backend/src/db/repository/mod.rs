//! Repository traits and error types.

pub mod catalogue;
pub mod error;
pub mod preferences;

pub use catalogue::CatalogueRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use preferences::PreferenceRepository;

/// Everything the HTTP layer needs from one backend.
pub trait FullRepository: CatalogueRepository + PreferenceRepository {}

impl<T> FullRepository for T where T: CatalogueRepository + PreferenceRepository {}
