//! Repository factory for dependency injection.
//!
//! Builds the repository the server runs on from an [`AppConfig`].

use std::str::FromStr;
use std::sync::Arc;

use super::catalogue::{load_catalogue_or_empty, LoadedCatalogue};
use super::config::{AppConfig, ConfigError};
use super::preferences::{JsonFilePreferenceStorage, MemoryPreferenceStorage, PreferenceStorage};
use super::repositories::LocalRepository;
use super::repository::FullRepository;

/// Where preferences are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Kept in process memory only
    Memory,
    /// JSON files in the configured directory
    File,
}

impl FromStr for RepositoryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    pub fn create_storage(
        repo_type: RepositoryType,
        config: &AppConfig,
    ) -> Arc<dyn PreferenceStorage> {
        match repo_type {
            RepositoryType::Memory => Arc::new(MemoryPreferenceStorage::new()),
            RepositoryType::File => {
                Arc::new(JsonFilePreferenceStorage::new(config.preferences.dir.clone()))
            }
        }
    }

    /// Repository over an already loaded catalogue.
    pub fn create(
        config: &AppConfig,
        catalogue: LoadedCatalogue,
    ) -> Result<Arc<dyn FullRepository>, ConfigError> {
        let repo_type = config.storage_type()?;
        let storage = Self::create_storage(repo_type, config);
        Ok(Arc::new(LocalRepository::with_storage(
            config.catalogue.name.clone(),
            catalogue,
            storage,
        )))
    }

    /// Load the configured catalogue (degrading to empty) and build the repository.
    pub fn from_config(config: &AppConfig) -> Result<Arc<dyn FullRepository>, ConfigError> {
        let catalogue = load_catalogue_or_empty(&config.catalogue.path);
        Self::create(config, catalogue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::CatalogueRepository;

    #[test]
    fn test_repository_type_parsing() {
        assert_eq!("memory".parse::<RepositoryType>().unwrap(), RepositoryType::Memory);
        assert_eq!(" FILE ".parse::<RepositoryType>().unwrap(), RepositoryType::File);
        assert!("postgres".parse::<RepositoryType>().is_err());
    }

    #[tokio::test]
    async fn test_from_config_with_missing_catalogue() {
        let mut config = AppConfig::default();
        config.catalogue.path = "/no/such/stars.json".into();
        config.preferences.storage = "memory".to_string();

        let repo = RepositoryFactory::from_config(&config).unwrap();
        let info = repo.catalogue_info().await.unwrap();
        assert_eq!(info.star_count, 0);
    }
}
