// src/services/site_stats_service/mod.rs

pub mod compute;

pub use compute::*;
