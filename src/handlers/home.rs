use crate::routes;

/// GET / handler - Home page greeting
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Greeting text", body = String)
    ),
    tag = "home"
)]
pub async fn home_handler() -> &'static str {
    "Home Page Sensor API"
}
