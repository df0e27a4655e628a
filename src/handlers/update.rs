use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::models::Sensor;
use crate::routes;
use crate::state::AppState;

/// PUT /sensors/{id} handler - Replace a sensor
///
/// Replaces the whole value at `id` (no field merge) and echoes the decoded
/// input back. The key is never recomputed, even when the new payload's name
/// would slugify differently.
#[utoipa::path(
    put,
    path = routes::SENSOR_ITEM,
    params(
        ("id" = String, Path, description = "Slug id of the sensor")
    ),
    request_body = Sensor,
    responses(
        (status = 200, description = "Sensor replaced", body = Sensor),
        (status = 404, description = "No sensor with this id", body = String),
        (status = 500, description = "Malformed request body", body = String)
    ),
    tag = "sensors"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Sensor>), ApiError> {
    let sensor: Sensor = serde_json::from_slice(&body)?;

    state.store.update(&id, sensor.clone())?;

    tracing::info!("successfully updated sensor with id: {}", id);
    Ok((StatusCode::OK, Json(sensor)))
}
