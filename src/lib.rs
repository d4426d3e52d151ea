//! Statistics and stability aggregation over Core Web Vitals samples.
//!
//! The engine in [`services`] is pure and synchronous: it takes a batch of
//! already-filtered [`models::PerformanceSample`]s and derives percentile
//! summaries, stability rankings, platform differences, time-of-day points
//! and history series. [`api`] exposes it over HTTP on top of a
//! [`db::SampleStore`].

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod utils;

pub use models::AppState;
