//! API handlers for Seatmap REST endpoints

pub mod health;
pub mod libraries;
pub mod openapi;
pub mod stats;
