//! Crowd metrics repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::CrowdSample};

#[derive(Clone)]
pub struct CrowdMetricsRepository {
    pool: Pool<Postgres>,
}

impl CrowdMetricsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List samples of a destination taken at or after `since`, in
    /// chronological order
    pub async fn list_since(
        &self,
        destination_id: i32,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<CrowdSample>> {
        let rows = sqlx::query_as::<_, CrowdSample>(
            r#"
            SELECT id, destination_id, ts, raw_count
            FROM crowd_metrics
            WHERE destination_id = $1 AND ts >= $2
            ORDER BY ts ASC, id ASC
            "#,
        )
        .bind(destination_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
