//! Catalogue storage and user preferences.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers (http::handlers)                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Services (services::*) - pure view derivation           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository traits (repository) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │  LocalRepository: catalogue in memory,        │
//!     │  preferences in a PreferenceStorage           │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The repository is built once at startup by [`RepositoryFactory`] and
//! passed to handlers through the application state; there is no global
//! instance.
//!
//! ```ignore
//! use gsc_rust::db::{AppConfig, RepositoryFactory};
//!
//! let config = AppConfig::load()?;
//! let repo = RepositoryFactory::from_config(&config)?;
//! let stars = repo.list_stars().await?;
//! ```

pub mod catalogue;
pub mod checksum;
pub mod config;
pub mod factory;
pub mod preferences;
pub mod repositories;
pub mod repository;

pub use catalogue::{
    catalogue_info, load_catalogue_file, load_catalogue_or_empty, parse_catalogue_json,
    LoadedCatalogue,
};
pub use checksum::calculate_checksum;
pub use config::{AppConfig, ConfigError};
pub use factory::{RepositoryFactory, RepositoryType};
pub use preferences::{
    JsonFilePreferenceStorage, MemoryPreferenceStorage, PreferenceError, PreferenceStorage,
    Preferences,
};
pub use repositories::LocalRepository;
pub use repository::{
    CatalogueRepository, ErrorContext, FullRepository, PreferenceRepository, RepositoryError,
    RepositoryResult,
};
