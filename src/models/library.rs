//! Library model and aggregate result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Library record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Library {
    pub id: i32,
    /// Display name, searchable as a case-insensitive substring
    pub name: String,
}

/// Query parameters for library search
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct LibrarySearchQuery {
    /// Substring to match against library names (empty or absent matches all)
    pub q: Option<String>,
}

/// Capacity and current vacancy of a single library
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LibraryOccupancy {
    /// Total number of seats in the library
    pub capacity: i64,
    /// Seats currently flagged vacant
    #[serde(rename = "vacantSeats")]
    pub vacant_seats: i64,
}

/// Aggregate statistics across all libraries
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GlobalStats {
    /// Placeholder metric, not derived from stored data
    #[serde(rename = "energyEfficiency")]
    pub energy_efficiency: i64,
    /// Total seat count across every library
    pub capacity: i64,
    /// Total vacant seat count across every library
    #[serde(rename = "vacantSeats")]
    pub vacant_seats: i64,
}

/// One hourly point in a library's occupancy history
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OccupancySnapshot {
    /// Sample timestamp (RFC 3339)
    pub time: DateTime<Utc>,
    /// capacity minus seats whose most recent log entry before `time` was occupied
    #[serde(rename = "vacantSeats")]
    pub vacant_seats: i64,
}
