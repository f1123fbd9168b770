//! Seat models. Vacancy history lives in the `seats_log` table and is only
//! ever aggregated, never read row by row; see the seats repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Seat record as stored in the `seats` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Seat {
    pub id: i32,
    pub is_vacant: bool,
    /// Zero-based grid column
    pub pos_x: i32,
    /// Zero-based grid row
    pub pos_y: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bounding grid of a library's seats, max coordinate + 1 on each axis.
/// Both fields are null when the library has no seats at all.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GridDimensions {
    pub width: Option<i32>,
    pub height: Option<i32>,
}
