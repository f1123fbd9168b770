//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, libraries, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Seatmap API",
        version = "1.0.0",
        description = "Library Seat Occupancy Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Libraries
        libraries::search_libraries,
        libraries::list_seats,
        libraries::get_grid_dimensions,
        libraries::get_occupancy,
        libraries::get_history,
        // Stats
        stats::get_global_stats,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::models::library::Library,
            crate::models::library::LibraryOccupancy,
            crate::models::library::GlobalStats,
            crate::models::library::OccupancySnapshot,
            crate::models::seat::Seat,
            crate::models::seat::GridDimensions,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "libraries", description = "Library seat queries"),
        (name = "stats", description = "Global statistics")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
