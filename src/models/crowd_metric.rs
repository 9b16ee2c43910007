//! Crowd metric model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::busyness::{busyness_score, Capacity};

/// One people-count observation at a destination
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CrowdSample {
    pub id: i64,
    pub destination_id: i32,
    pub ts: DateTime<Utc>,
    pub raw_count: i32,
}

/// A crowd sample scored against its destination's capacity
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MetricPoint {
    pub destination_id: i32,
    /// Destination display name
    pub name: String,
    /// Observation time
    pub ts: DateTime<Utc>,
    pub raw_count: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub busyness_score: Decimal,
}

impl MetricPoint {
    pub fn scored(sample: CrowdSample, name: &str, capacity: Capacity) -> Self {
        Self {
            destination_id: sample.destination_id,
            name: name.to_string(),
            ts: sample.ts,
            busyness_score: busyness_score(sample.raw_count, capacity),
            raw_count: sample.raw_count,
        }
    }
}

/// Query parameters for destination metrics
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct MetricsQuery {
    /// Lookback window in hours (default 24). The leading integer is used;
    /// non-numeric or non-positive values fall back to the default.
    pub hours: Option<String>,
}
