// src/api/mod.rs

pub mod error;
pub mod handler;

pub use error::ApiError;
pub use handler::{
    cluster_stability_handler, global_stats_handler, grades_handler, url_datapoints_handler,
    url_stats_handler,
};

use crate::models::AppState;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/performance/stats", get(global_stats_handler))
        .route("/performance/grades", get(grades_handler))
        .route("/urls/{slug}/stats", get(url_stats_handler))
        .route("/urls/{slug}/datapoints", get(url_datapoints_handler))
        .route("/clusters/stability", get(cluster_stability_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
