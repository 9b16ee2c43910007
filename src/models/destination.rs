//! Destination model

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::busyness::{busyness_score, Capacity};

/// A destination joined with its latest crowd sample, as read from the store
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DestinationSnapshotRow {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub max_people: Option<i32>,
    /// People count of the most recent sample
    pub raw_count: i32,
}

/// Latest known state of a destination
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DestinationSnapshot {
    pub id: i32,
    pub name: String,
    /// Free-text region label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Category (natural, cultural, ...)
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub longitude: Decimal,
    /// Rated capacity
    pub max_people: Option<i32>,
    /// People count of the most recent sample
    pub raw_count: i32,
    /// Null when the destination has no usable capacity
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub busyness_score: Option<Decimal>,
}

impl From<DestinationSnapshotRow> for DestinationSnapshot {
    fn from(row: DestinationSnapshotRow) -> Self {
        let busyness_score = Capacity::from_column(row.max_people)
            .map(|capacity| busyness_score(row.raw_count, capacity));

        Self {
            id: row.id,
            name: row.name,
            location: row.location,
            kind: row.kind,
            latitude: row.latitude,
            longitude: row.longitude,
            max_people: row.max_people,
            raw_count: row.raw_count,
            busyness_score,
        }
    }
}

/// Identity and capacity of a single destination
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DestinationCapacity {
    pub id: i32,
    pub name: String,
    pub max_people: Option<i32>,
}
