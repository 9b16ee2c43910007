//! Destination endpoints

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{DestinationSnapshot, MetricPoint, MetricsQuery},
};

/// Latest busyness of every destination
#[utoipa::path(
    get,
    path = "/destinations",
    tag = "destinations",
    responses(
        (status = 200, description = "Latest sample of every sampled destination", body = Vec<DestinationSnapshot>),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_destinations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<DestinationSnapshot>>> {
    let snapshots = state
        .services
        .destinations
        .snapshots()
        .await
        .map_err(|e| e.store_context("Failed to fetch destinations"))?;

    Ok(Json(snapshots))
}

/// Busyness history of one destination
#[utoipa::path(
    get,
    path = "/destinations/{id}/metrics",
    tag = "destinations",
    params(
        ("id" = i32, Path, description = "Destination ID"),
        MetricsQuery
    ),
    responses(
        (status = 200, description = "Scored samples, oldest first", body = Vec<MetricPoint>),
        (status = 400, description = "Malformed destination id", body = crate::error::ErrorResponse),
        (status = 404, description = "Destination not found or no capacity set", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_destination_metrics(
    State(state): State<crate::AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<MetricsQuery>, QueryRejection>,
) -> AppResult<Json<Vec<MetricPoint>>> {
    let id: i32 = path
        .ok()
        .and_then(|Path(id)| id.parse().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid destination id".to_string()))?;

    // An undecodable query string (e.g. a repeated `hours`) means the default window
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let metrics = &state.services.metrics;
    let hours = metrics.window_hours(query.hours.as_deref());

    let points = metrics
        .history(id, hours)
        .await
        .map_err(|e| e.store_context("Failed to fetch metrics"))?;

    Ok(Json(points))
}
