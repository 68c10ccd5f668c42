//! # Galaxy Star Catalogue backend
//!
//! Core of an interactive star-catalogue browser: deterministic placement of
//! stars in a 3D galaxy map, and the filter/sort/paginate pipeline behind
//! every catalogue view.
//!
//! ## Architecture
//!
//! - [`algorithms`]: seeded generator, position mapper, colour mapping
//! - [`models`]: stars, filter state, annotations
//! - [`services`]: view derivation (catalogue page, galaxy map, HR diagram,
//!   compare, jump-to-map)
//! - [`routes`]: response types for each view
//! - [`api`]: re-exports of the public DTOs
//! - [`db`]: catalogue loading, preferences, repository pattern, configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Everything below [`http`] is synchronous and pure apart from the
//! repository traits; the same star collection and [`models::FilterState`]
//! always derive the same views.

// RepositoryError carries an ErrorContext for debugging.
#![allow(clippy::result_large_err)]

pub mod algorithms;

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
