use serde::{Deserialize, Serialize};

/// A named sensor with its recorded measurements.
///
/// The wire field for the measurement list is the singular `measure`,
/// kept for compatibility with existing clients of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Sensor {
    pub name: String,
    #[serde(rename = "measure", default)]
    pub measures: Vec<Measure>,
}

/// A single scalar reading associated with a sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Measure {
    pub value: u8,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}
