//! Filter/sort/paginate derivation of the catalogue list.
//!
//! Every function here is a pure function of the full star collection and a
//! [`FilterState`]; nothing is cached and the input slice is never mutated.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::algorithms::{star_type_color, temperature_to_color_hex, SeededGenerator};
use crate::api::{CatalogueView, StarDetail};
use crate::db::preferences::Preferences;
use crate::db::repository::{CatalogueRepository, RepositoryResult};
use crate::models::{FilterState, SortKey, Star, PAGE_SIZE};

/// Whether `star` passes the search, type and range filters.
///
/// `query` must already be trimmed and lowercased.
fn matches_filters(star: &Star, filters: &FilterState, query: &str) -> bool {
    if !query.is_empty() && !star.name.to_lowercase().contains(query) {
        return false;
    }

    if !filters.type_filters.is_empty() && !filters.type_filters.contains(&star.star_type) {
        return false;
    }

    if !filters.distance_range.contains(star.distance()) {
        return false;
    }

    // Optional fields: a missing value compares as 0, and the range is only
    // enforced when it has at least one real bound.
    if filters.temperature_range.has_valid_bound()
        && !filters
            .temperature_range
            .contains(star.temperature().unwrap_or(0.0))
    {
        return false;
    }

    if filters.luminosity_range.has_valid_bound()
        && !filters
            .luminosity_range
            .contains(star.luminosity().unwrap_or(0.0))
    {
        return false;
    }

    true
}

/// Stars passing every filter, in input order.
pub fn filter_stars<'a>(stars: &'a [Star], filters: &FilterState) -> Vec<&'a Star> {
    let query = filters.search_query.trim().to_lowercase();
    stars
        .iter()
        .filter(|star| matches_filters(star, filters, &query))
        .collect()
}

/// Lowercase with combining marks stripped after canonical decomposition,
/// so `"Å"` folds to `"a"`. Ligatures such as `æ` are left as they are.
fn fold_for_collation(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Collation used for name sorting.
///
/// Compared by base letters first, then accents, then case; on a case tie
/// lowercase sorts before uppercase, which matches the default collation of
/// the browsers the catalogue was built for.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    fold_for_collation(a)
        .cmp(&fold_for_collation(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn numeric_key(star: &Star, key: SortKey) -> Option<f64> {
    match key {
        SortKey::Name => None,
        SortKey::Distance => Some(star.distance()),
        SortKey::Temperature => star.temperature(),
        SortKey::Luminosity => star.luminosity(),
    }
}

/// Ascending comparator for `key`; missing values sort last.
pub fn compare_by(a: &Star, b: &Star, key: SortKey) -> Ordering {
    if key == SortKey::Name {
        return locale_compare(&a.name, &b.name);
    }

    match (numeric_key(a, key), numeric_key(b, key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(av), Some(bv)) => av.partial_cmp(&bv).unwrap_or(Ordering::Equal),
    }
}

/// Stable in-place sort by `key`.
pub fn sort_stars(stars: &mut [&Star], key: SortKey) {
    stars.sort_by(|a, b| compare_by(a, b, key));
}

/// `max(1, ceil(count / PAGE_SIZE))`.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Filtered and sorted stars, all pages.
pub fn filtered_stars(stars: &[Star], filters: &FilterState) -> Vec<Star> {
    let mut matched = filter_stars(stars, filters);
    sort_stars(&mut matched, filters.sort_by);
    matched.into_iter().cloned().collect()
}

/// Derive the page of the catalogue selected by `filters`.
///
/// The requested page is clamped to `[1, total_pages]`; an empty result still
/// reports one page.
pub fn derive_view(stars: &[Star], filters: &FilterState) -> CatalogueView {
    let mut matched = filter_stars(stars, filters);
    sort_stars(&mut matched, filters.sort_by);

    let total_count = matched.len();
    let total_pages = total_pages(total_count);
    let page = clamp_page(filters.page, total_pages);
    let start = (page - 1) * PAGE_SIZE;

    let items = matched
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    CatalogueView {
        items,
        page,
        total_pages,
        total_count,
        page_size: PAGE_SIZE,
    }
}

/// Pick one star uniformly from the filtered, sorted set.
pub fn random_star(
    stars: &[Star],
    filters: &FilterState,
    rng: &mut SeededGenerator,
) -> Option<Star> {
    let mut matched = filter_stars(stars, filters);
    sort_stars(&mut matched, filters.sort_by);
    let idx = rng.next_index(matched.len())?;
    Some(matched[idx].clone())
}

/// Detail panel data for `star`.
pub fn star_detail(star: Star, prefs: &Preferences) -> StarDetail {
    let temperature_color = star
        .temperature()
        .filter(|t| *t > 0.0)
        .map(temperature_to_color_hex);
    StarDetail {
        position: star.position(),
        type_color: star_type_color(&star.star_type).to_string(),
        temperature_color,
        is_favorite: prefs.is_favorite(star.id),
        annotations: prefs.annotations_for(star.id).to_vec(),
        star,
    }
}

/// Current page of the catalogue for `filters`.
pub async fn get_catalogue_view<R: CatalogueRepository + ?Sized>(
    repo: &R,
    filters: &FilterState,
) -> RepositoryResult<CatalogueView> {
    let stars = repo.list_stars().await?;
    let view = derive_view(&stars, filters);
    log::debug!(
        "catalogue view: page {}/{} ({} matching)",
        view.page,
        view.total_pages,
        view.total_count
    );
    Ok(view)
}
