//! Seatmap Library Seat Occupancy Tracking System
//!
//! A Rust implementation of the Seatmap backend, providing a read-only
//! REST JSON API over library seat grids, vacancy counts, and the
//! occupancy history reconstructed from the seat vacancy log.

use std::sync::Arc;

pub mod api;
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
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
    pub services: Arc<services::Services>,
}
