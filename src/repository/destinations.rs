//! Destinations repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{DestinationCapacity, DestinationSnapshotRow},
};

#[derive(Clone)]
pub struct DestinationsRepository {
    pool: Pool<Postgres>,
}

impl DestinationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List destinations joined with their most recent crowd sample.
    ///
    /// Ties on `ts` go to the sample with the highest id. The inner join
    /// drops destinations that have never been sampled.
    pub async fn list_with_latest_sample(&self) -> AppResult<Vec<DestinationSnapshotRow>> {
        let rows = sqlx::query_as::<_, DestinationSnapshotRow>(
            r#"
            SELECT
                d.id,
                d.name,
                d.location,
                d.type,
                d.latitude,
                d.longitude,
                d.max_people,
                latest.raw_count
            FROM destinations d
            JOIN (
                SELECT DISTINCT ON (destination_id) destination_id, raw_count
                FROM crowd_metrics
                ORDER BY destination_id, ts DESC, id DESC
            ) AS latest ON latest.destination_id = d.id
            ORDER BY d.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Get identity and capacity of a destination
    pub async fn find_capacity(&self, id: i32) -> AppResult<Option<DestinationCapacity>> {
        let row = sqlx::query_as::<_, DestinationCapacity>(
            "SELECT id, name, max_people FROM destinations WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
