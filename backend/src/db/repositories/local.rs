//! In-memory repository over a loaded catalogue.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::CatalogueInfo;
use crate::db::catalogue::{catalogue_info, LoadedCatalogue};
use crate::db::preferences::{MemoryPreferenceStorage, PreferenceStorage, Preferences};
use crate::db::repository::{
    CatalogueRepository, ErrorContext, PreferenceRepository, RepositoryError, RepositoryResult,
};
use crate::models::{Star, StarId};

pub const DEFAULT_CATALOGUE_NAME: &str = "Galaxy Star Catalogue";

/// Catalogue in an `Arc<[Star]>`. Preferences are not cached here; every
/// load and save goes straight to the [`PreferenceStorage`].
pub struct LocalRepository {
    name: String,
    stars: Arc<[Star]>,
    checksum: String,
    storage: Arc<dyn PreferenceStorage>,
}

impl LocalRepository {
    /// Empty catalogue with in-memory preferences.
    pub fn new() -> Self {
        Self::with_catalogue(DEFAULT_CATALOGUE_NAME, LoadedCatalogue::empty())
    }

    pub fn with_catalogue(name: impl Into<String>, catalogue: LoadedCatalogue) -> Self {
        Self::with_storage(name, catalogue, Arc::new(MemoryPreferenceStorage::new()))
    }

    pub fn with_storage(
        name: impl Into<String>,
        catalogue: LoadedCatalogue,
        storage: Arc<dyn PreferenceStorage>,
    ) -> Self {
        log::debug!("local repository: {} stars", catalogue.stars.len());
        Self {
            name: name.into(),
            stars: catalogue.stars.into(),
            checksum: catalogue.checksum,
            storage,
        }
    }

    /// Catalogue built from records directly (no checksum).
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self::with_catalogue(
            DEFAULT_CATALOGUE_NAME,
            LoadedCatalogue {
                stars,
                checksum: String::new(),
            },
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogueRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn list_stars(&self) -> RepositoryResult<Arc<[Star]>> {
        Ok(Arc::clone(&self.stars))
    }

    async fn get_star(&self, id: StarId) -> RepositoryResult<Star> {
        self.stars
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Star {} not found", id),
                    ErrorContext::new("get_star")
                        .with_entity("star")
                        .with_entity_id(id),
                )
            })
    }

    async fn catalogue_info(&self) -> RepositoryResult<CatalogueInfo> {
        Ok(catalogue_info(&self.name, &self.stars, &self.checksum))
    }
}

#[async_trait]
impl PreferenceRepository for LocalRepository {
    async fn load_preferences(&self) -> RepositoryResult<Preferences> {
        Ok(self.storage.load())
    }

    async fn save_preferences(&self, prefs: &Preferences) -> RepositoryResult<()> {
        self.storage.save(prefs).map_err(|e| {
            RepositoryError::storage_with_context(
                e.to_string(),
                ErrorContext::new("save_preferences").with_entity("preferences"),
            )
        })
    }
}
