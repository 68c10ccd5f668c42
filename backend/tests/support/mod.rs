#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use gsc_rust::models::{Star, StarType};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on drop (including unwinding) and holds a
/// process-wide lock, since tests run in parallel and the environment is
/// shared.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// The bundled sample dataset (16 stars, ids 0..=15).
pub fn sample_catalogue_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/stars.json")
}

pub fn create_test_star(
    id: i64,
    name: &str,
    star_type: StarType,
    distance: f64,
    temperature: Option<f64>,
    luminosity: Option<f64>,
) -> Star {
    let mut star = Star::new(id, name, star_type, distance);
    star.temperature_k = temperature;
    star.luminosity_solar = luminosity.map(qtty::SolarLuminosities::new);
    star
}

/// `count` stars cycling through the known types, with distance `count - i`.
pub fn create_catalogue(count: usize) -> Vec<Star> {
    (0..count)
        .map(|i| {
            create_test_star(
                i as i64,
                &format!("Star {:04}", i),
                StarType::KNOWN[i % StarType::KNOWN.len()].clone(),
                (count - i) as f64,
                Some(3000.0 + i as f64),
                Some(0.5 + i as f64),
            )
        })
        .collect()
}
