//! Favorites and annotations, with explicit load/save.
//!
//! [`Preferences`] is a plain value owned by the session. A
//! [`PreferenceStorage`] persists it as two JSON blobs, one per key, so a
//! corrupt favorites blob does not take the annotations down with it.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Annotation, AnnotationId, Star, StarId};

/// Storage key of the favorite id list.
pub const FAVORITES_KEY: &str = "gsc_favorites_v1";
/// Storage key of the per-star annotation map.
pub const ANNOTATIONS_KEY: &str = "gsc_annotations_v1";

/// Error type for preference storage.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Key not present in store.
    #[error("preference key not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A user's favorites and annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Favorite star ids in the order they were added.
    #[serde(default)]
    pub favorites: Vec<StarId>,
    #[serde(default)]
    pub annotations: BTreeMap<StarId, Vec<Annotation>>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite flag of `id`; returns the new state.
    pub fn toggle_favorite(&mut self, id: StarId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| *f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    pub fn is_favorite(&self, id: StarId) -> bool {
        self.favorites.contains(&id)
    }

    /// The favorites among `stars`, in the order of `stars`.
    pub fn favorite_stars(&self, stars: &[Star]) -> Vec<Star> {
        stars
            .iter()
            .filter(|s| self.is_favorite(s.id))
            .cloned()
            .collect()
    }

    pub fn annotations_for(&self, id: StarId) -> &[Annotation] {
        self.annotations.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a note to `id`. Blank text is ignored; the stored text is trimmed.
    pub fn add_annotation(&mut self, id: StarId, text: &str) -> Option<Annotation> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let annotation = Annotation::new(text);
        self.annotations
            .entry(id)
            .or_default()
            .push(annotation.clone());
        Some(annotation)
    }

    /// Replace the text of an existing note. Returns the updated note, or
    /// `None` when `annotation_id` is not attached to `id`.
    pub fn update_annotation(
        &mut self,
        id: StarId,
        annotation_id: AnnotationId,
        text: &str,
    ) -> Option<Annotation> {
        let annotation = self
            .annotations
            .get_mut(&id)?
            .iter_mut()
            .find(|a| a.id == annotation_id)?;
        annotation.text = text.to_string();
        Some(annotation.clone())
    }

    /// Remove a note; returns whether anything was removed.
    pub fn delete_annotation(&mut self, id: StarId, annotation_id: AnnotationId) -> bool {
        let Some(list) = self.annotations.get_mut(&id) else {
            return false;
        };
        let before = list.len();
        list.retain(|a| a.id != annotation_id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.annotations.remove(&id);
        }
        removed
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.values().map(Vec::len).sum()
    }
}

fn load_key<T, S>(store: &S, key: &str) -> Option<T>
where
    T: for<'de> Deserialize<'de>,
    S: PreferenceStorage + ?Sized,
{
    match store.load_raw(key) {
        Ok(bytes) if bytes.is_empty() => None,
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring corrupt preference data for {}: {}", key, e);
                None
            }
        },
        Err(PreferenceError::NotFound(_)) => None,
        Err(e) => {
            log::warn!("Failed to read preference data for {}: {}", key, e);
            None
        }
    }
}

/// Storage port for raw preference blobs, keyed by [`FAVORITES_KEY`] and
/// [`ANNOTATIONS_KEY`].
pub trait PreferenceStorage: Send + Sync {
    /// Load a raw blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, PreferenceError>;

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), PreferenceError>;

    /// Load preferences. Missing or corrupt blobs degrade to empty values.
    fn load(&self) -> Preferences {
        Preferences {
            favorites: load_key(self, FAVORITES_KEY).unwrap_or_default(),
            annotations: load_key(self, ANNOTATIONS_KEY).unwrap_or_default(),
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<(), PreferenceError> {
        self.save_raw(FAVORITES_KEY, &serde_json::to_vec(&prefs.favorites)?)?;
        self.save_raw(ANNOTATIONS_KEY, &serde_json::to_vec(&prefs.annotations)?)?;
        Ok(())
    }
}

/// In-process store; contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStorage {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryPreferenceStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryPreferenceStorage {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, PreferenceError> {
        self.blobs
            .lock()
            .get(key)
            .cloned()
            .ok_or_else(|| PreferenceError::NotFound(key.to_string()))
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), PreferenceError> {
        self.blobs.lock().insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

/// One `<key>.json` file per blob inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStorage {
    dir: PathBuf,
}

impl JsonFilePreferenceStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl PreferenceStorage for JsonFilePreferenceStorage {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, PreferenceError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(PreferenceError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), PreferenceError> {
        fs::create_dir_all(&self.dir)?;
        // Write-then-rename so a crash never leaves a half-written blob.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
