//! Loading the star catalogue dataset.
//!
//! The dataset is a JSON array of [`Star`] records (the `stars.json` shape).
//! It is read once per session; nothing here mutates it afterwards.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use super::checksum::calculate_checksum;
use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::api::CatalogueInfo;
use crate::models::Star;

/// A parsed dataset plus the checksum of its raw text.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalogue {
    pub stars: Vec<Star>,
    pub checksum: String,
}

impl LoadedCatalogue {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Summary of this dataset under `name`.
    pub fn info(&self, name: &str) -> CatalogueInfo {
        catalogue_info(name, &self.stars, &self.checksum)
    }
}

/// Parse a catalogue from its JSON text.
///
/// Duplicate ids are rejected since every view keys stars by id.
pub fn parse_catalogue_json(content: &str) -> RepositoryResult<LoadedCatalogue> {
    let stars: Vec<Star> = serde_json::from_str(content)
        .map_err(|e| RepositoryError::from(e).with_operation("parse_catalogue"))?;

    let mut seen = HashSet::with_capacity(stars.len());
    for star in &stars {
        if !seen.insert(star.id) {
            return Err(RepositoryError::validation_with_context(
                "duplicate star id",
                ErrorContext::new("parse_catalogue")
                    .with_entity("star")
                    .with_entity_id(star.id),
            ));
        }
    }

    Ok(LoadedCatalogue {
        stars,
        checksum: calculate_checksum(content),
    })
}

/// Read and parse the catalogue file at `path`.
pub fn load_catalogue_file<P: AsRef<Path>>(path: P) -> RepositoryResult<LoadedCatalogue> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let err = RepositoryError::from(e).with_operation("load_catalogue");
        log::debug!("reading {} failed: {}", path.display(), err);
        err
    })?;
    let catalogue = parse_catalogue_json(&content)?;
    log::info!(
        "Loaded {} stars from {}",
        catalogue.stars.len(),
        path.display()
    );
    Ok(catalogue)
}

/// Like [`load_catalogue_file`], but a missing or malformed file yields an
/// empty catalogue and a warning instead of an error.
pub fn load_catalogue_or_empty<P: AsRef<Path>>(path: P) -> LoadedCatalogue {
    let path = path.as_ref();
    match load_catalogue_file(path) {
        Ok(catalogue) => catalogue,
        Err(e) => {
            log::warn!(
                "Failed to load catalogue {}: {}; continuing with no stars",
                path.display(),
                e
            );
            LoadedCatalogue::empty()
        }
    }
}

/// Star count per type label, plus totals.
pub fn catalogue_info(name: &str, stars: &[Star], checksum: &str) -> CatalogueInfo {
    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    for star in stars {
        *type_counts.entry(star.star_type.label().to_string()).or_default() += 1;
    }
    CatalogueInfo {
        name: name.to_string(),
        star_count: stars.len(),
        checksum: checksum.to_string(),
        type_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": 0, "name": "Sun", "type": "Main Sequence (G-type)", "distance_ly": 0.0000158,
         "temperature_k": 5778, "luminosity_solar": 1.0},
        {"id": 1, "name": "Proxima Centauri", "type": "Red Dwarf", "distance_ly": 4.24},
        {"id": 2, "name": "Sirius A", "type": "Main Sequence (A-type)", "distance_ly": 8.6}
    ]"#;

    #[test]
    fn test_parse_catalogue_json() {
        let catalogue = parse_catalogue_json(SAMPLE).unwrap();
        assert_eq!(catalogue.stars.len(), 3);
        assert_eq!(catalogue.checksum, calculate_checksum(SAMPLE));

        let info = catalogue.info("sample");
        assert_eq!(info.star_count, 3);
        assert_eq!(info.type_counts.get("Red Dwarf"), Some(&1));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 5, "name": "A", "type": "Pulsar"},
            {"id": 5, "name": "B", "type": "Pulsar"}
        ]"#;
        let err = parse_catalogue_json(json).unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(err.context().entity_id.as_deref(), Some("5"));
    }

    #[test]
    fn test_malformed_json_is_a_validation_error() {
        let err = parse_catalogue_json("{not json").unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
    }

    #[test]
    fn test_load_catalogue_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalogue = load_catalogue_file(file.path()).unwrap();
        assert_eq!(catalogue.stars[1].name, "Proxima Centauri");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_catalogue_file("/definitely/not/here/stars.json").unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let catalogue = load_catalogue_or_empty("/definitely/not/here/stars.json");
        assert!(catalogue.stars.is_empty());
        assert!(catalogue.checksum.is_empty());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"id\": ").unwrap();
        assert!(load_catalogue_or_empty(file.path()).stars.is_empty());
    }
}
