//! Seats repository: grid geometry, vacancy counts, and historical
//! occupancy reconstructed from the append-only `seats_log` table.

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::seat::{GridDimensions, Seat},
};

#[derive(Clone)]
pub struct SeatsRepository {
    pool: Pool<Postgres>,
}

impl SeatsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all seats of a library. Unknown library ids yield an empty list.
    pub async fn list(&self, library_id: i32) -> AppResult<Vec<Seat>> {
        let rows = sqlx::query_as::<_, Seat>(
            "SELECT id, is_vacant, pos_x, pos_y, created_at, updated_at
             FROM seats WHERE library_id = $1",
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Count all seats of a library
    pub async fn count_all(&self, library_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seats WHERE library_id = $1")
            .bind(library_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count seats of a library currently flagged vacant
    pub async fn count_vacant(&self, library_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM seats WHERE library_id = $1 AND is_vacant = TRUE",
        )
        .bind(library_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Total seat count across every library
    pub async fn count_all_global(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seats")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Total vacant seat count across every library
    pub async fn count_vacant_global(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seats WHERE is_vacant = TRUE")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Bounding grid of a library's seats: (max pos_x + 1, max pos_y + 1).
    /// A library with no seats has no grid, which is the (None, None)
    /// sentinel rather than a zero-sized one. The width query runs first;
    /// when it comes back empty the height query is skipped entirely.
    pub async fn grid_dimensions(&self, library_id: i32) -> AppResult<GridDimensions> {
        let max_x: Option<i32> = sqlx::query_scalar(
            "SELECT pos_x FROM seats WHERE library_id = $1 ORDER BY pos_x DESC LIMIT 1",
        )
        .bind(library_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(max_x) = max_x else {
            return Ok(GridDimensions {
                width: None,
                height: None,
            });
        };

        let max_y: Option<i32> = sqlx::query_scalar(
            "SELECT pos_y FROM seats WHERE library_id = $1 ORDER BY pos_y DESC LIMIT 1",
        )
        .bind(library_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(GridDimensions {
            width: Some(max_x + 1),
            height: max_y.map(|y| y + 1),
        })
    }

    /// Count seats of a library that were occupied as of `at`.
    ///
    /// A seat's state "as of `at`" is its log entry with the largest id among
    /// entries strictly before `at` (log ids grow monotonically, so MAX(id)
    /// is the most recent). Seats with no entry before `at` drop out of the
    /// left join and are not counted: NULL never satisfies `is_vacant = FALSE`.
    pub async fn count_occupied_at(
        &self,
        library_id: i32,
        at: DateTime<Utc>,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM seats
            LEFT JOIN (
                SELECT sl.seat_id, sl.is_vacant
                FROM seats_log sl
                WHERE sl.id IN (
                    SELECT MAX(id)
                    FROM seats_log
                    WHERE created_at < $2
                    GROUP BY seat_id
                )
            ) most_recent ON most_recent.seat_id = seats.id
            WHERE seats.library_id = $1 AND most_recent.is_vacant = FALSE
            "#,
        )
        .bind(library_id)
        .bind(at)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
