//! Repository layer for database operations

pub mod libraries;
pub mod seats;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub libraries: libraries::LibrariesRepository,
    pub seats: seats::SeatsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            libraries: libraries::LibrariesRepository::new(pool.clone()),
            seats: seats::SeatsRepository::new(pool.clone()),
            pool,
        }
    }
}
