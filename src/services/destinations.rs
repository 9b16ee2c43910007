//! Destinations service

use std::sync::Arc;

use crate::{error::AppResult, models::DestinationSnapshot, repository::CrowdStore};

#[derive(Clone)]
pub struct DestinationsService {
    store: Arc<dyn CrowdStore>,
}

impl DestinationsService {
    pub fn new(store: Arc<dyn CrowdStore>) -> Self {
        Self { store }
    }

    /// Latest sample and busyness score of every sampled destination
    pub async fn snapshots(&self) -> AppResult<Vec<DestinationSnapshot>> {
        let rows = self.store.latest_snapshots().await?;
        Ok(rows.into_iter().map(DestinationSnapshot::from).collect())
    }
}
