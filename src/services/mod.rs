//! Business logic services

pub mod destinations;
pub mod metrics;

use std::sync::Arc;

use crate::{config::MetricsConfig, error::AppResult, repository::CrowdStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub destinations: destinations::DestinationsService,
    pub metrics: metrics::MetricsService,
    store: Arc<dyn CrowdStore>,
}

impl Services {
    /// Create all services over the given store
    pub fn new(store: Arc<dyn CrowdStore>, metrics_config: MetricsConfig) -> Self {
        Self {
            destinations: destinations::DestinationsService::new(store.clone()),
            metrics: metrics::MetricsService::new(store.clone(), metrics_config),
            store,
        }
    }

    /// Check the store answers
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
