//! Database tests for the crowd queries
//!
//! Each test runs against a fresh database created by `sqlx::test`.
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use std::sync::Arc;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crowdmap_server::{
    config::MetricsConfig,
    repository::{CrowdStore, Repository},
    services::Services,
    AppError,
};

fn services(pool: PgPool) -> Services {
    Services::new(Arc::new(Repository::new(pool)), MetricsConfig::default())
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_snapshot_picks_latest_sample(pool: PgPool) {
    let rows = Repository::new(pool).latest_snapshots().await.unwrap();

    let lake = rows.iter().find(|r| r.id == 1).expect("Lake Bled listed");
    assert_eq!(lake.raw_count, 45);
    assert_eq!(lake.location.as_deref(), Some("Upper Carniola"));
    assert_eq!(lake.kind, "natural");
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_snapshot_breaks_timestamp_ties_by_id(pool: PgPool) {
    let rows = Repository::new(pool).latest_snapshots().await.unwrap();

    let bridge = rows.iter().find(|r| r.id == 3).expect("Old Bridge listed");
    assert_eq!(bridge.raw_count, 80);
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_snapshot_excludes_unsampled_destinations(pool: PgPool) {
    let rows = Repository::new(pool).latest_snapshots().await.unwrap();

    let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_snapshot_scores(pool: PgPool) {
    let snapshots = services(pool).destinations.snapshots().await.unwrap();

    let scores: Vec<Option<Decimal>> = snapshots.iter().map(|s| s.busyness_score).collect();
    assert_eq!(
        scores,
        vec![Some(Decimal::new(45, 1)), Some(Decimal::new(4, 0)), None]
    );
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_samples_since_filters_and_orders(pool: PgPool) {
    let since = Utc::now() - Duration::hours(24);
    let samples = Repository::new(pool).samples_since(1, since).await.unwrap();

    let counts: Vec<i32> = samples.iter().map(|s| s.raw_count).collect();
    assert_eq!(counts, vec![20, 45]);
    assert!(samples[0].ts < samples[1].ts);
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_history_scores_window(pool: PgPool) {
    let points = services(pool).metrics.history(1, 24).await.unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].busyness_score, Decimal::new(2, 0));
    assert_eq!(points[1].busyness_score, Decimal::new(45, 1));
    assert!(points.iter().all(|p| p.name == "Lake Bled"));
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_history_wider_window_includes_older_samples(pool: PgPool) {
    let points = services(pool).metrics.history(1, 48).await.unwrap();

    let counts: Vec<i32> = points.iter().map(|p| p.raw_count).collect();
    assert_eq!(counts, vec![90, 20, 45]);
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_history_requires_capacity(pool: PgPool) {
    let services = services(pool);

    let missing = services.metrics.history(999, 24).await.unwrap_err();
    assert!(matches!(missing, AppError::NotFound(_)));

    let no_capacity = services.metrics.history(4, 24).await.unwrap_err();
    assert!(matches!(no_capacity, AppError::NotFound(_)));
}

#[sqlx::test(migrations = false, fixtures("schema", "crowd"))]
#[ignore]
async fn test_find_capacity(pool: PgPool) {
    let repository = Repository::new(pool);

    let gallery = repository.find_capacity(2).await.unwrap().unwrap();
    assert_eq!(gallery.name, "National Gallery");
    assert_eq!(gallery.max_people, Some(50));

    assert!(repository.find_capacity(999).await.unwrap().is_none());
}
