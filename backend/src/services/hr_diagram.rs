//! Hertzsprung-Russell diagram data.

use crate::algorithms::star_type_color;
use crate::api::{AxisDomain, HrDiagramData, HrPoint};
use crate::db::repository::{CatalogueRepository, RepositoryResult};
use crate::models::{FilterState, Star};
use crate::services::catalogue_view::filtered_stars;

pub const TEMPERATURE_AXIS: AxisDomain = AxisDomain {
    min: 2000.0,
    max: 40000.0,
    reversed: true,
};

pub const LUMINOSITY_AXIS: AxisDomain = AxisDomain {
    min: -4.0,
    max: 6.0,
    reversed: false,
};

const MIN_MARKER_RADIUS: f64 = 3.0;
const MAX_MARKER_RADIUS: f64 = 10.0;

/// Plot marker radius from the stellar radius (1 solar radius if unknown).
pub fn marker_radius(star: &Star) -> f64 {
    (star.radius_solar.unwrap_or(1.0) * 0.8).clamp(MIN_MARKER_RADIUS, MAX_MARKER_RADIUS)
}

fn is_plottable(value: Option<f64>) -> bool {
    value.is_some_and(|v| v != 0.0 && !v.is_nan())
}

/// HR point for `star`, or `None` when temperature or luminosity is missing or zero.
pub fn hr_point(star: &Star) -> Option<HrPoint> {
    if !is_plottable(star.temperature()) || !is_plottable(star.luminosity()) {
        return None;
    }
    let temperature = star.temperature()?;
    let luminosity = star.luminosity()?;

    Some(HrPoint {
        id: star.id,
        name: star.name.clone(),
        star_type: star.star_type.clone(),
        x: temperature,
        y: if luminosity > 0.0 { luminosity.log10() } else { 0.0 },
        color: star_type_color(&star.star_type).to_string(),
        marker_radius: marker_radius(star),
    })
}

pub fn compute_hr_diagram_data(stars: &[Star]) -> HrDiagramData {
    let points: Vec<HrPoint> = stars.iter().filter_map(hr_point).collect();
    HrDiagramData {
        skipped_count: stars.len() - points.len(),
        points,
        temperature_axis: TEMPERATURE_AXIS,
        luminosity_axis: LUMINOSITY_AXIS,
    }
}

/// HR diagram for the stars currently passing `filters`.
pub async fn get_hr_diagram_data<R: CatalogueRepository + ?Sized>(
    repo: &R,
    filters: &FilterState,
) -> RepositoryResult<HrDiagramData> {
    let stars = repo.list_stars().await?;
    let visible = filtered_stars(&stars, filters);
    Ok(compute_hr_diagram_data(&visible))
}
