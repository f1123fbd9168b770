//! Library API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        library::{Library, LibraryOccupancy, LibrarySearchQuery, OccupancySnapshot},
        seat::{GridDimensions, Seat},
    },
};

/// Search libraries by name
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    params(LibrarySearchQuery),
    responses(
        (status = 200, description = "Matching libraries", body = Vec<Library>)
    )
)]
pub async fn search_libraries(
    State(state): State<crate::AppState>,
    Query(query): Query<LibrarySearchQuery>,
) -> AppResult<Json<Vec<Library>>> {
    let q = query.q.unwrap_or_default();
    let libraries = state.services.libraries.search(&q).await?;
    Ok(Json(libraries))
}

/// List the seats of a library
#[utoipa::path(
    get,
    path = "/libraries/{id}/seats",
    tag = "libraries",
    params(("id" = i32, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Seats of the library", body = Vec<Seat>)
    )
)]
pub async fn list_seats(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Seat>>> {
    let seats = state.services.libraries.seats(id).await?;
    Ok(Json(seats))
}

/// Grid dimensions of a library's seat layout
#[utoipa::path(
    get,
    path = "/libraries/{id}/grid",
    tag = "libraries",
    params(("id" = i32, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Grid width and height, null when the library has no seats", body = GridDimensions)
    )
)]
pub async fn get_grid_dimensions(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<GridDimensions>> {
    let dims = state.services.libraries.grid_dimensions(id).await?;
    Ok(Json(dims))
}

/// Capacity and current vacancy of a library
#[utoipa::path(
    get,
    path = "/libraries/{id}/occupancy",
    tag = "libraries",
    params(("id" = i32, Path, description = "Library ID")),
    responses(
        (status = 200, description = "Current occupancy", body = LibraryOccupancy)
    )
)]
pub async fn get_occupancy(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<LibraryOccupancy>> {
    let occupancy = state.services.occupancy.library_occupancy(id).await?;
    Ok(Json(occupancy))
}

/// Hourly vacancy history for the past 24 hours, oldest first
#[utoipa::path(
    get,
    path = "/libraries/{id}/history",
    tag = "libraries",
    params(("id" = i32, Path, description = "Library ID")),
    responses(
        (status = 200, description = "24 hourly vacancy snapshots", body = Vec<OccupancySnapshot>)
    )
)]
pub async fn get_history(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<OccupancySnapshot>>> {
    let history = state.services.occupancy.history(id).await?;
    Ok(Json(history))
}
