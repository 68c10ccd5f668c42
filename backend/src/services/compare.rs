//! Side-by-side comparison of up to three stars.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::{CompareData, CompareMetric, CompareRow};
use crate::models::{Star, StarId};

/// Maximum number of stars in a comparison.
pub const MAX_COMPARE: usize = 3;

/// Ordered, duplicate-free set of at most [`MAX_COMPARE`] star ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompareSet {
    ids: Vec<StarId>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` at the end. Returns `false` (and leaves the set unchanged)
    /// when it is already present or the set is full.
    pub fn add(&mut self, id: StarId) -> bool {
        if self.ids.contains(&id) || self.ids.len() >= MAX_COMPARE {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: StarId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|x| *x != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[StarId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    /// Comma-separated ids, e.g. `"1,2,3"`.
    pub fn to_query(&self) -> String {
        self.to_string()
    }

    /// Hydrate from a share-link value. Entries that do not parse are
    /// skipped; duplicates and entries past the limit are ignored like `add`.
    pub fn from_query(query: &str) -> Self {
        let mut set = Self::new();
        for id in query.split(',').filter_map(|part| part.parse::<StarId>().ok()) {
            set.add(id);
        }
        set
    }
}

impl fmt::Display for CompareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ids.iter().map(|id| id.to_string()).collect();
        f.write_str(&parts.join(","))
    }
}

fn compute_row(metric: CompareMetric, stars: &[Star]) -> CompareRow {
    let values: Vec<Option<f64>> = stars.iter().map(|s| metric.value_of(s)).collect();

    let known = || {
        stars
            .iter()
            .zip(&values)
            .filter_map(|(s, v)| v.filter(|v| !v.is_nan()).map(|v| (s.id, v)))
    };
    // First star wins on ties.
    let min_id = known()
        .reduce(|best, cur| if cur.1 < best.1 { cur } else { best })
        .map(|(id, _)| id);
    let max_id = known()
        .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
        .map(|(id, _)| id);

    CompareRow {
        metric,
        label: metric.label().to_string(),
        values,
        min_id,
        max_id,
    }
}

/// Resolve `set` against the catalogue and build per-metric rows.
///
/// Stars appear in catalogue order; ids not in the catalogue are dropped.
pub fn compute_compare_data(catalogue: &[Star], set: &CompareSet) -> CompareData {
    let stars: Vec<Star> = catalogue
        .iter()
        .filter(|s| set.contains(s.id))
        .take(MAX_COMPARE)
        .cloned()
        .collect();

    let rows = CompareMetric::ALL
        .iter()
        .map(|metric| compute_row(*metric, &stars))
        .collect();

    CompareData {
        stars,
        rows,
        query: set.to_query(),
    }
}
