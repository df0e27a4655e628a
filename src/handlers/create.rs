use axum::{body::Bytes, extract::State, http::StatusCode};

use crate::error::ApiError;
use crate::models::Sensor;
use crate::routes;
use crate::state::AppState;

/// POST /sensors handler - Create a sensor
///
/// The storage id is the slug of the sensor's name, derived here before the
/// store is called. Posting a name that slugifies to an existing id silently
/// overwrites that entry.
///
/// The body is decoded by hand rather than through the `Json` extractor:
/// malformed JSON must map to a 500, not the extractor's 4xx rejection.
#[utoipa::path(
    post,
    path = routes::SENSOR_LIST,
    request_body = Sensor,
    responses(
        (status = 200, description = "Sensor stored successfully"),
        (status = 500, description = "Malformed request body", body = String)
    ),
    tag = "sensors"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let sensor: Sensor = serde_json::from_slice(&body)?;

    let id = slug::slugify(&sensor.name);
    state.store.add(&id, sensor)?;

    tracing::info!("successfully created sensor with id: {}", id);
    Ok(StatusCode::OK)
}
