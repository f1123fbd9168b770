//! Libraries service

use crate::{
    error::AppResult,
    models::{
        library::Library,
        seat::{GridDimensions, Seat},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LibrariesService {
    repository: Repository,
}

impl LibrariesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search libraries by name substring (empty query lists all)
    pub async fn search(&self, query: &str) -> AppResult<Vec<Library>> {
        self.repository.libraries.search(query).await
    }

    /// List the seats of a library
    pub async fn seats(&self, library_id: i32) -> AppResult<Vec<Seat>> {
        self.repository.seats.list(library_id).await
    }

    /// Grid dimensions of a library's seat layout
    pub async fn grid_dimensions(&self, library_id: i32) -> AppResult<GridDimensions> {
        self.repository.seats.grid_dimensions(library_id).await
    }
}
