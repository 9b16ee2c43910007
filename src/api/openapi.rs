//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{destinations, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Crowdmap API",
        version = "0.1.0",
        description = "Read-only destination busyness API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Destinations
        destinations::list_destinations,
        destinations::get_destination_metrics,
    ),
    components(
        schemas(
            crate::models::DestinationSnapshot,
            crate::models::MetricPoint,
            crate::models::MetricsQuery,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "destinations", description = "Destination busyness")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
