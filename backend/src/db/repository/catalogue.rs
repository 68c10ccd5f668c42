//! Catalogue repository trait.
//!
//! The catalogue is read-only for the lifetime of a session; implementations
//! load it once and hand out shared slices.

use std::sync::Arc;

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::CatalogueInfo;
use crate::models::{Star, StarId};

/// Repository trait for star catalogue access.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Whether the repository is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Every star, in dataset order.
    async fn list_stars(&self) -> RepositoryResult<Arc<[Star]>>;

    /// Fetch one star.
    ///
    /// # Returns
    /// * `Ok(Star)` - The star with this id
    /// * `Err(RepositoryError::NotFound)` - If no star has this id
    async fn get_star(&self, id: StarId) -> RepositoryResult<Star>;

    /// Name, size, checksum and type breakdown of the loaded dataset.
    async fn catalogue_info(&self) -> RepositoryResult<CatalogueInfo>;
}
