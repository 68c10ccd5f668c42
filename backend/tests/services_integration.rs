//! Service layer over the bundled sample catalogue.

use gsc_rust::algorithms::make_generator;
use gsc_rust::db::catalogue::load_catalogue_file;
use gsc_rust::db::repositories::LocalRepository;
use gsc_rust::db::repository::CatalogueRepository;
use gsc_rust::models::{FilterState, SortKey, StarId, StarType, ValueRange};
use gsc_rust::routes::compare::CompareMetric;
use gsc_rust::routes::galaxy_map::LuminosityBucket;
use gsc_rust::services::{
    compute_compare_data, get_catalogue_view, get_galaxy_map_data, get_hr_diagram_data,
    jump_to_map, random_star, CompareSet, FocusChannel,
};

mod support;

fn sample_repository() -> LocalRepository {
    let catalogue = load_catalogue_file(support::sample_catalogue_path()).unwrap();
    LocalRepository::with_catalogue("sample", catalogue)
}

#[tokio::test]
async fn test_catalogue_info_of_sample_data() {
    let repo = sample_repository();
    let info = repo.catalogue_info().await.unwrap();

    assert_eq!(info.name, "sample");
    assert_eq!(info.star_count, 16);
    assert_eq!(info.checksum.len(), 64);
    assert_eq!(info.type_counts.get("Red Dwarf"), Some(&3));
    assert_eq!(info.type_counts.get("White Dwarf"), Some(&1));
}

#[tokio::test]
async fn test_default_view_excludes_out_of_range_stars() {
    let repo = sample_repository();
    let view = get_catalogue_view(&repo, &FilterState::default()).await.unwrap();

    // Crab Pulsar is beyond 5000 ly; Vela Pulsar has no temperature (counted
    // as 0 K); RX J1856.5-3754 is hotter than 60000 K.
    assert_eq!(view.total_count, 13);
    assert_eq!(view.total_pages, 1);
    let names: Vec<_> = view.items.iter().map(|s| s.name.as_str()).collect();
    assert!(!names.contains(&"Crab Pulsar"));
    assert!(!names.contains(&"Vela Pulsar"));
    assert!(!names.contains(&"RX J1856.5-3754"));
    assert_eq!(names.first(), Some(&"Alpha Centauri A"));
}

#[tokio::test]
async fn test_open_ranges_include_every_star() {
    let repo = sample_repository();
    let mut filters = FilterState::default();
    filters.set_distance_range(ValueRange::new(0.0, 10_000.0));
    filters.set_temperature_range(ValueRange::new(f64::NAN, f64::NAN));
    filters.set_luminosity_range(ValueRange::new(f64::NAN, f64::NAN));
    filters.set_sort_by(SortKey::Temperature);

    let view = get_catalogue_view(&repo, &filters).await.unwrap();
    assert_eq!(view.total_count, 16);
    assert_eq!(view.items[0].name, "Wolf 359");
    // Pulsars have no temperature and sort last.
    assert!(view.items[14..]
        .iter()
        .all(|s| s.star_type == StarType::Pulsar));
}

#[tokio::test]
async fn test_search_and_type_filters_combine() {
    let repo = sample_repository();
    let mut filters = FilterState::default();
    filters.set_search_query("sirius");
    filters.toggle_type_filter(StarType::MainSequenceA);

    let view = get_catalogue_view(&repo, &filters).await.unwrap();
    assert_eq!(view.total_count, 1);
    assert_eq!(view.items[0].name, "Sirius A");
}

#[tokio::test]
async fn test_random_star_is_reproducible() {
    let repo = sample_repository();
    let stars = repo.list_stars().await.unwrap();
    let filters = FilterState::default();

    let a = random_star(&stars, &filters, &mut make_generator(2024)).unwrap();
    let b = random_star(&stars, &filters, &mut make_generator(2024)).unwrap();
    assert_eq!(a.id, b.id);
}

#[tokio::test]
async fn test_galaxy_map_covers_filtered_set() {
    let repo = sample_repository();
    let data = get_galaxy_map_data(&repo, &FilterState::default()).await.unwrap();

    assert_eq!(data.total_count, 13);
    assert_eq!(data.points.len(), 13);
    let bucket_total: usize = data.buckets.iter().map(|b| b.count).sum();
    assert_eq!(bucket_total, 13);

    let deneb = data.points.iter().find(|p| p.name == "Deneb").unwrap();
    assert_eq!(deneb.bucket, LuminosityBucket::VeryBright);
    let proxima = data.points.iter().find(|p| p.name == "Proxima Centauri").unwrap();
    assert_eq!(proxima.bucket, LuminosityBucket::VeryDim);
}

#[tokio::test]
async fn test_hr_diagram_skips_incomplete_stars() {
    let repo = sample_repository();
    let mut filters = FilterState::default();
    filters.set_distance_range(ValueRange::new(0.0, 10_000.0));
    filters.set_temperature_range(ValueRange::new(f64::NAN, f64::NAN));
    filters.set_luminosity_range(ValueRange::new(f64::NAN, f64::NAN));

    let data = get_hr_diagram_data(&repo, &filters).await.unwrap();
    assert_eq!(data.points.len(), 13);
    assert_eq!(data.skipped_count, 3);

    let sun = data.points.iter().find(|p| p.name == "Sun").unwrap();
    assert_eq!(sun.x, 5778.0);
    assert_eq!(sun.y, 0.0);
    assert_eq!(sun.marker_radius, 3.0);

    let betelgeuse = data.points.iter().find(|p| p.name == "Betelgeuse").unwrap();
    assert_eq!(betelgeuse.marker_radius, 10.0);
}

#[tokio::test]
async fn test_compare_share_link_round_trip() {
    let repo = sample_repository();
    let stars = repo.list_stars().await.unwrap();

    let set = CompareSet::from_query("9,oops,4,7,1");
    assert_eq!(set.ids(), &[StarId::new(9), StarId::new(4), StarId::new(7)]);
    assert_eq!(set.to_query(), "9,4,7");

    let data = compute_compare_data(&stars, &set);
    let names: Vec<_> = data.stars.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Sirius A", "Betelgeuse", "Rigel"]);

    let distance = data
        .rows
        .iter()
        .find(|r| r.metric == CompareMetric::Distance)
        .unwrap();
    assert_eq!(distance.min_id, Some(StarId::new(4)));
    assert_eq!(distance.max_id, Some(StarId::new(9)));
}

#[tokio::test]
async fn test_focus_intent_is_delivered_once() {
    let repo = sample_repository();
    let star = repo.get_star(StarId::new(5)).await.unwrap();
    let channel = FocusChannel::new();

    channel.publish(jump_to_map(&star));
    let consumer = channel.clone();
    let handle = tokio::spawn(async move { consumer.take() });
    let intent = handle.await.unwrap().unwrap();

    assert_eq!(intent.star_id, StarId::new(5));
    assert_eq!(intent.position, star.position());
    assert_eq!(intent.camera_position.y, intent.position.y + 10.0);
    assert!(channel.take().is_none());
}

#[tokio::test]
async fn test_unknown_star_is_not_found() {
    let repo = sample_repository();
    let err = repo.get_star(StarId::new(999)).await.unwrap_err();
    assert!(err.to_string().contains("999"));
}
