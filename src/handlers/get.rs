use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::models::Sensor;
use crate::routes;
use crate::state::AppState;

/// GET /sensors/{id} handler - Retrieve a sensor by id
#[utoipa::path(
    get,
    path = routes::SENSOR_ITEM,
    params(
        ("id" = String, Path, description = "Slug id of the sensor")
    ),
    responses(
        (status = 200, description = "Sensor found", body = Sensor),
        (status = 404, description = "No sensor with this id", body = String)
    ),
    tag = "sensors"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Sensor>), ApiError> {
    let sensor = state.store.get(&id)?;

    tracing::info!("successfully retrieved sensor with id: {}", id);
    Ok((StatusCode::OK, Json(sensor)))
}
