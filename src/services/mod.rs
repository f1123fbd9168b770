//! Business logic services

pub mod libraries;
pub mod occupancy;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub libraries: libraries::LibrariesService,
    pub occupancy: occupancy::OccupancyService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            libraries: libraries::LibrariesService::new(repository.clone()),
            occupancy: occupancy::OccupancyService::new(repository),
        }
    }
}
