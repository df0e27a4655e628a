use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{
    create_handler, delete_handler, get_handler, health_handler, home_handler, list_handler,
    update_handler,
};
use crate::routes;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Registers every API route from the constants in [`routes`], mounts the
/// Swagger UI, and attaches a [`TraceLayer`] that logs each HTTP
/// request/response through the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route(routes::HOME, get(home_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::SENSOR_LIST, get(list_handler).post(create_handler))
        .route(
            routes::SENSOR_ITEM,
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            store: Arc::new(MemStore::new()),
        }
    }

    #[tokio::test]
    async fn test_home_route_registered() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_full_crud_round_trip() {
        let app = build(test_state());

        // Create
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/sensors")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name":"Kitchen Temp","measure":[{"value":21}]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Read back through the derived slug
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/sensors/kitchen-temp")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Kitchen Temp", "measure": [{"value": 21}]})
        );

        // Replace
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/sensors/kitchen-temp")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Kitchen","measure":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // List shows the replacement
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/sensors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kitchen-temp": {"name": "Kitchen", "measure": []}})
        );

        // Delete, then the id is gone
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/sensors/kitchen-temp")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/sensors/kitchen-temp")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
