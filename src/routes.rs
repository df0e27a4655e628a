// Route path constants - single source of truth for all API paths

pub const HOME: &str = "/";
pub const HEALTH: &str = "/health";
pub const SENSOR_LIST: &str = "/sensors";
pub const SENSOR_ITEM: &str = "/sensors/{id}";
