//! Application state for the HTTP server.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::db::preferences::Preferences;
use crate::db::repository::{FullRepository, PreferenceRepository, RepositoryResult};
use crate::services::compare::CompareSet;
use crate::services::focus::FocusChannel;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalogue and preference persistence
    pub repository: Arc<dyn FullRepository>,
    /// The session's favorites and annotations. This is the only in-memory
    /// copy; the repository just persists snapshots of it.
    pub preferences: Arc<RwLock<Preferences>>,
    pub compare: Arc<Mutex<CompareSet>>,
    pub focus: FocusChannel,
    /// Serializes mutate-then-save so snapshots reach storage in order.
    save_lock: Arc<tokio::sync::Mutex<()>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn FullRepository>, preferences: Preferences) -> Self {
        Self {
            repository,
            preferences: Arc::new(RwLock::new(preferences)),
            compare: Arc::new(Mutex::new(CompareSet::new())),
            focus: FocusChannel::new(),
            save_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// State seeded with the preferences stored in `repository`.
    pub async fn from_repository(repository: Arc<dyn FullRepository>) -> RepositoryResult<Self> {
        let preferences = repository.load_preferences().await?;
        Ok(Self::new(repository, preferences))
    }

    /// Apply `f` to the preferences and persist the result.
    ///
    /// A failed save is logged and otherwise ignored; the in-memory change stands.
    pub async fn update_preferences<T>(&self, f: impl FnOnce(&mut Preferences) -> T) -> T {
        let _save_guard = self.save_lock.lock().await;
        let (result, snapshot) = {
            let mut prefs = self.preferences.write();
            let result = f(&mut *prefs);
            (result, prefs.clone())
        };
        if let Err(e) = self.repository.save_preferences(&snapshot).await {
            tracing::warn!("Failed to save preferences: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::api::CatalogueInfo;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::CatalogueRepository;
    use crate::models::{Star, StarId};

    /// Keeps the last saved snapshot; the first save is slow.
    struct SlowFirstSave {
        catalogue: LocalRepository,
        saves: AtomicUsize,
        persisted: Mutex<Option<Preferences>>,
    }

    #[async_trait]
    impl CatalogueRepository for SlowFirstSave {
        async fn health_check(&self) -> RepositoryResult<bool> {
            self.catalogue.health_check().await
        }

        async fn list_stars(&self) -> RepositoryResult<Arc<[Star]>> {
            self.catalogue.list_stars().await
        }

        async fn get_star(&self, id: StarId) -> RepositoryResult<Star> {
            self.catalogue.get_star(id).await
        }

        async fn catalogue_info(&self) -> RepositoryResult<CatalogueInfo> {
            self.catalogue.catalogue_info().await
        }
    }

    #[async_trait]
    impl PreferenceRepository for SlowFirstSave {
        async fn load_preferences(&self) -> RepositoryResult<Preferences> {
            Ok(Preferences::default())
        }

        async fn save_preferences(&self, prefs: &Preferences) -> RepositoryResult<()> {
            if self.saves.fetch_add(1, Ordering::SeqCst) == 0 {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            *self.persisted.lock() = Some(prefs.clone());
            Ok(())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_toggles_persist_latest_snapshot() {
        let repo = Arc::new(SlowFirstSave {
            catalogue: LocalRepository::new(),
            saves: AtomicUsize::new(0),
            persisted: Mutex::new(None),
        });
        let state = AppState::new(repo.clone(), Preferences::default());

        let first = {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .update_preferences(|p| p.toggle_favorite(StarId::new(1)))
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(5)).await;
        let second = {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .update_preferences(|p| p.toggle_favorite(StarId::new(2)))
                    .await
            })
        };
        assert!(first.await.unwrap());
        assert!(second.await.unwrap());

        let persisted = repo.persisted.lock().clone().unwrap();
        assert_eq!(persisted.favorites, vec![StarId::new(1), StarId::new(2)]);
        assert_eq!(persisted, *state.preferences.read());
        assert_eq!(repo.saves.load(Ordering::SeqCst), 2);
    }
}
