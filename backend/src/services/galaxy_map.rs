//! 3D galaxy map: deterministic marker placement plus luminosity bucketing.

use crate::algorithms::{star_type_color, Position3};
use crate::api::{BucketInfo, GalaxyMapData, LuminosityBucket, MapExtent, MapPoint};
use crate::db::repository::{CatalogueRepository, RepositoryResult};
use crate::models::{FilterState, Star};
use crate::services::catalogue_view::filtered_stars;

/// Luminosity assumed for stars without a catalogue value.
const FALLBACK_LUMINOSITY: f64 = 0.001;
/// Floor keeping log10 finite.
const MIN_LUMINOSITY: f64 = 1e-6;

/// (bucket, label, upper log10 bound, point size, opacity), dimmest first.
const BUCKETS: [(LuminosityBucket, &str, Option<f64>, f64, f64); 5] = [
    (LuminosityBucket::VeryDim, "Very dim", Some(-1.0), 1.2, 0.7),
    (LuminosityBucket::Dim, "Dim", Some(0.5), 1.8, 0.85),
    (LuminosityBucket::Medium, "Medium", Some(2.0), 2.4, 0.95),
    (LuminosityBucket::Bright, "Bright", Some(4.0), 3.2, 1.0),
    (LuminosityBucket::VeryBright, "Very bright", None, 4.2, 1.0),
];

/// Luminosity used for marker sizing, never below [`MIN_LUMINOSITY`].
pub fn marker_luminosity(star: &Star) -> f64 {
    star.luminosity()
        .unwrap_or(FALLBACK_LUMINOSITY)
        .max(MIN_LUMINOSITY)
}

/// Bucket for a (positive) luminosity in solar units.
pub fn bucket_for_luminosity(luminosity: f64) -> LuminosityBucket {
    let log_l = luminosity.log10();
    BUCKETS
        .iter()
        .find(|(_, _, upper, _, _)| upper.is_some_and(|upper| log_l < upper))
        .map(|(bucket, ..)| *bucket)
        .unwrap_or(LuminosityBucket::VeryBright)
}

fn empty_extent() -> MapExtent {
    MapExtent {
        min: Position3::default(),
        max: Position3::default(),
    }
}

/// Compute map markers, bucket populations and extent for `stars`.
///
/// Point order follows the input order.
pub fn compute_galaxy_map_data(stars: &[Star]) -> GalaxyMapData {
    let points: Vec<MapPoint> = stars
        .iter()
        .map(|star| {
            let luminosity = marker_luminosity(star);
            MapPoint {
                id: star.id,
                name: star.name.clone(),
                star_type: star.star_type.clone(),
                position: star.position(),
                color: star_type_color(&star.star_type).to_string(),
                luminosity,
                bucket: bucket_for_luminosity(luminosity),
            }
        })
        .collect();

    let mut lower = None;
    let buckets = BUCKETS
        .iter()
        .map(|&(bucket, label, upper, point_size, opacity)| {
            let info = BucketInfo {
                bucket,
                label: label.to_string(),
                min_log_luminosity: lower,
                max_log_luminosity: upper,
                point_size,
                opacity,
                count: points.iter().filter(|p| p.bucket == bucket).count(),
            };
            lower = upper;
            info
        })
        .collect();

    let extent = points
        .iter()
        .map(|p| p.position)
        .fold(None, |acc: Option<MapExtent>, pos| {
            Some(match acc {
                None => MapExtent { min: pos, max: pos },
                Some(e) => MapExtent {
                    min: Position3::new(e.min.x.min(pos.x), e.min.y.min(pos.y), e.min.z.min(pos.z)),
                    max: Position3::new(e.max.x.max(pos.x), e.max.y.max(pos.y), e.max.z.max(pos.z)),
                },
            })
        })
        .unwrap_or_else(empty_extent);

    GalaxyMapData {
        total_count: points.len(),
        points,
        buckets,
        extent,
    }
}

/// Galaxy map for the stars currently passing `filters`.
pub async fn get_galaxy_map_data<R: CatalogueRepository + ?Sized>(
    repo: &R,
    filters: &FilterState,
) -> RepositoryResult<GalaxyMapData> {
    let stars = repo.list_stars().await?;
    let visible = filtered_stars(&stars, filters);
    log::debug!("galaxy map: {} of {} stars visible", visible.len(), stars.len());
    Ok(compute_galaxy_map_data(&visible))
}
