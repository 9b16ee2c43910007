//! Crowdmap
//!
//! A read-only REST JSON API reporting how busy a set of destinations are,
//! scored from people-count samples against each destination's capacity.

use std::sync::Arc;

pub mod api;
pub mod busyness;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
