use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, Measure, Sensor};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rust-sensor-api",
        version = "1.0.0",
        description = "A minimal sensor CRUD API backed by an in-memory store"
    ),
    paths(
        handlers::home::home_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(schemas(Sensor, Measure, HealthResponse)),
    tags(
        (name = "home", description = "Home page"),
        (name = "health", description = "Health check operations"),
        (name = "sensors", description = "Sensor store operations")
    )
)]
pub struct ApiDoc;
