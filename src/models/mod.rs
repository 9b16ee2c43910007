//! Data models for Crowdmap

pub mod crowd_metric;
pub mod destination;

// Re-export commonly used types
pub use crowd_metric::{CrowdSample, MetricPoint, MetricsQuery};
pub use destination::{DestinationCapacity, DestinationSnapshot, DestinationSnapshotRow};
