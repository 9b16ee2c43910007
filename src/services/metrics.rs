//! Destination metrics service

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{
    busyness::Capacity,
    config::MetricsConfig,
    error::{AppError, AppResult},
    models::MetricPoint,
    repository::CrowdStore,
};

pub const NOT_FOUND_MESSAGE: &str = "Destination not found or no capacity set";

#[derive(Clone)]
pub struct MetricsService {
    store: Arc<dyn CrowdStore>,
    config: MetricsConfig,
}

impl MetricsService {
    pub fn new(store: Arc<dyn CrowdStore>, config: MetricsConfig) -> Self {
        Self { store, config }
    }

    /// Resolve the raw `hours` query parameter into a window length.
    ///
    /// Only the leading integer counts (`"1.5"` is one hour, `"12h"` twelve).
    /// Missing, non-numeric and non-positive values give the default window;
    /// anything above the configured maximum is clamped to it.
    pub fn window_hours(&self, raw: Option<&str>) -> i64 {
        match raw.and_then(leading_integer) {
            Some(hours) if hours > 0 => hours.min(self.config.max_hours),
            _ => self.config.default_hours,
        }
    }

    /// Scored samples of one destination over the last `hours`, oldest first
    pub async fn history(&self, destination_id: i32, hours: i64) -> AppResult<Vec<MetricPoint>> {
        self.history_at(destination_id, hours, Utc::now()).await
    }

    /// Same as [`history`](Self::history) with an explicit "now"
    pub async fn history_at(
        &self,
        destination_id: i32,
        hours: i64,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<MetricPoint>> {
        let destination = self
            .store
            .find_capacity(destination_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        let capacity = Capacity::from_column(destination.max_people)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        let window = Duration::try_hours(hours)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid window: {} hours", hours)))?;
        let since = now - window;

        tracing::debug!(destination_id, hours, %since, "Fetching crowd samples");

        let samples = self.store.samples_since(destination_id, since).await?;
        Ok(samples
            .into_iter()
            .map(|sample| MetricPoint::scored(sample, &destination.name, capacity))
            .collect())
    }
}

/// Optional sign and decimal digits at the start of `raw`, ignoring
/// leading whitespace. Digit runs too long for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
