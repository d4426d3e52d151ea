use crate::api::error::ApiError;
use crate::db::SampleQuery;
use crate::models::{
    AppState, DataPoint, GradesSummary, PerformanceSample, PlatformType, RangeParams, Report,
    StabilityReport, StatsParams,
};
use crate::services::{
    cluster_report, compute_report, data_points, grades_summary, ReportOptions, ScorerKind,
};
use crate::utils::parse_timestamp;
use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use log::info;
use std::sync::Arc;

pub async fn global_stats_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StatsParams>,
) -> Result<Json<Report>, ApiError> {
    let query = stats_query(&state, &params, None)?;
    info!(
        "Computing global stats from {} to {}",
        query.from, query.to
    );

    let options = ReportOptions::global();
    let report = compute(&state, query, move |samples, scorer| {
        compute_report(&samples, &options, &scorer)
    })
    .await?;
    Ok(Json(report))
}

pub async fn url_stats_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<StatsParams>,
) -> Result<Json<Report>, ApiError> {
    let url = state
        .store
        .url_by_slug(&slug)
        .ok_or_else(|| not_found("URL", &slug))?;
    let query = stats_query(&state, &params, Some(url.id))?;
    info!("Computing stats for {} from {} to {}", url.url, query.from, query.to);

    let options = ReportOptions::single_url();
    let report = compute(&state, query, move |samples, scorer| {
        compute_report(&samples, &options, &scorer)
    })
    .await?;
    Ok(Json(report))
}

pub async fn url_datapoints_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<RangeParams>,
) -> Result<Json<Vec<DataPoint>>, ApiError> {
    let url = state
        .store
        .url_by_slug(&slug)
        .ok_or_else(|| not_found("URL", &slug))?;
    let mut query = range_query(params.from.as_deref(), params.to.as_deref())?;
    query.url_id = Some(url.id);

    let points = compute(&state, query, |samples, _| data_points(&samples)).await?;
    Ok(Json(points))
}

pub async fn cluster_stability_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<StabilityReport>, ApiError> {
    let query = range_query(params.from.as_deref(), params.to.as_deref())?;
    let clusters = state.store.clusters();

    let report = compute(&state, query, move |samples, scorer| {
        cluster_report(&clusters, &samples, &scorer)
    })
    .await?;
    Ok(Json(report))
}

pub async fn grades_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RangeParams>,
) -> Result<Json<GradesSummary>, ApiError> {
    let query = range_query(params.from.as_deref(), params.to.as_deref())?;

    let summary = compute(&state, query, |samples, scorer| {
        grades_summary(&samples, &scorer)
    })
    .await?;
    Ok(Json(summary))
}

// Batches can be large; keep the fetch and the number crunching off the
// async workers
async fn compute<T, F>(state: &AppState, query: SampleQuery, work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(Vec<PerformanceSample>, ScorerKind) -> T + Send + 'static,
{
    let store = Arc::clone(&state.store);
    let scorer = state.scorer;
    let output = tokio::task::spawn_blocking(move || work(store.samples(&query), scorer))
        .await
        .context("stats computation panicked")?;
    Ok(output)
}

fn stats_query(
    state: &AppState,
    params: &StatsParams,
    url_id: Option<i64>,
) -> Result<SampleQuery, ApiError> {
    let mut query = range_query(params.from.as_deref(), params.to.as_deref())?;
    query.url_id = url_id;

    if let Some(slug) = params.platform.as_deref() {
        let platform = slug
            .parse::<PlatformType>()
            .map_err(|_| not_found("Platform", slug))?;
        query.platform = Some(platform);
    }

    if let Some(slug) = params.provider.as_deref() {
        let provider = state
            .store
            .provider_by_slug(slug)
            .ok_or_else(|| not_found("Provider", slug))?;
        query.provider_id = Some(provider.id);
    }

    Ok(query)
}

fn range_query(from: Option<&str>, to: Option<&str>) -> Result<SampleQuery, ApiError> {
    let from = from
        .and_then(parse_timestamp)
        .ok_or(ApiError::InvalidDate { field: "from" })?;
    let to = to
        .and_then(parse_timestamp)
        .ok_or(ApiError::InvalidDate { field: "to" })?;
    if from > to {
        return Err(ApiError::InvalidRange);
    }
    Ok(SampleQuery::between(from, to))
}

fn not_found(kind: &'static str, slug: &str) -> ApiError {
    ApiError::NotFound {
        kind,
        slug: slug.to_string(),
    }
}
