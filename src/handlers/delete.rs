use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;

/// DELETE /sensors/{id} handler - Remove a sensor
///
/// Deleting an id that was never added still returns 200.
#[utoipa::path(
    delete,
    path = routes::SENSOR_ITEM,
    params(
        ("id" = String, Path, description = "Slug id of the sensor")
    ),
    responses(
        (status = 200, description = "Sensor removed (or was already absent)")
    ),
    tag = "sensors"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.remove(&id)?;

    tracing::info!("successfully removed sensor with id: {}", id);
    Ok(StatusCode::OK)
}
