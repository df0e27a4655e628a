use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::models::Sensor;
use crate::routes;
use crate::state::AppState;

/// GET /sensors handler - List all sensors
///
/// Returns a JSON object mapping each sensor's id to the sensor itself.
/// The map is a snapshot; entries are in no particular order.
#[utoipa::path(
    get,
    path = routes::SENSOR_LIST,
    responses(
        (status = 200, description = "All sensors keyed by id", body = HashMap<String, Sensor>)
    ),
    tag = "sensors"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HashMap<String, Sensor>>), ApiError> {
    let sensors = state.store.list()?;

    tracing::info!("listed {} sensors", sensors.len());
    Ok((StatusCode::OK, Json(sensors)))
}
