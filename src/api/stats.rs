//! Global statistics API endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::library::GlobalStats};

/// Aggregate statistics across all libraries
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Global seat statistics", body = GlobalStats)
    )
)]
pub async fn get_global_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<GlobalStats>> {
    let stats = state.services.occupancy.global_stats().await?;
    Ok(Json(stats))
}
