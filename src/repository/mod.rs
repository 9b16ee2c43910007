//! Repository layer for database operations

pub mod crowd_metrics;
pub mod destinations;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{CrowdSample, DestinationCapacity, DestinationSnapshotRow},
};

/// Read access to destinations and their crowd samples
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CrowdStore: Send + Sync {
    /// Every destination joined with its latest sample, ordered by id.
    /// Destinations without samples are omitted.
    async fn latest_snapshots(&self) -> AppResult<Vec<DestinationSnapshotRow>>;

    /// Identity and capacity of one destination
    async fn find_capacity(&self, destination_id: i32) -> AppResult<Option<DestinationCapacity>>;

    /// Samples for a destination taken at or after `since`, oldest first
    async fn samples_since(
        &self,
        destination_id: i32,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<CrowdSample>>;

    /// Round-trip to the store
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub destinations: destinations::DestinationsRepository,
    pub crowd_metrics: crowd_metrics::CrowdMetricsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            destinations: destinations::DestinationsRepository::new(pool.clone()),
            crowd_metrics: crowd_metrics::CrowdMetricsRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl CrowdStore for Repository {
    async fn latest_snapshots(&self) -> AppResult<Vec<DestinationSnapshotRow>> {
        self.destinations.list_with_latest_sample().await
    }

    async fn find_capacity(&self, destination_id: i32) -> AppResult<Option<DestinationCapacity>> {
        self.destinations.find_capacity(destination_id).await
    }

    async fn samples_since(
        &self,
        destination_id: i32,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<CrowdSample>> {
        self.crowd_metrics.list_since(destination_id, since).await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
