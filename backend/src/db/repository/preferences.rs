//! Preference repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::db::preferences::Preferences;

/// Repository trait for the user's favorites and annotations.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Current preferences. Never fails on missing or corrupt stored data;
    /// those degrade to empty values.
    async fn load_preferences(&self) -> RepositoryResult<Preferences>;

    /// Persist `prefs`, replacing what was stored.
    async fn save_preferences(&self, prefs: &Preferences) -> RepositoryResult<()>;
}
