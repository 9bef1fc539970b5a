//! Router setup and configuration.

use axum::{
    Router,
    http::HeaderName,
    routing::{get, patch, post},
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{api, form, health};
use crate::api::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    // Browser form: page plus post/redirect/get submissions
    let form_routes = Router::new()
        .route("/", get(form::page))
        .route("/form/action", post(form::submit_action));

    // JSON API over the same form
    let api_routes = Router::new()
        .route("/", get(api::get_form))
        .route("/config", patch(api::update_config))
        .route("/generate/single", post(api::generate_single))
        .route("/generate/batch", post(api::generate_batch))
        .route("/generate/specific", post(api::generate_specific))
        .route("/reset", post(api::reset_counter))
        .route("/ids", get(api::list_ids).delete(api::clear_ids));

    let mut router = Router::new()
        .merge(health_routes)
        .merge(form_routes)
        .nest("/v1/form", api_routes);

    if state.config.assets.enabled {
        router = router.nest_service("/static", ServeDir::new(&state.config.assets.path));
    }

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .fallback(health::not_found)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    fn test_router() -> Router {
        let mut config = AppConfig::default();
        config.assets.enabled = false;
        create_router(AppState::new(Arc::new(config)))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_page_renders_initial_state() {
        let response = test_router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let html = body_text(response).await;
        assert!(html.contains("GIET000001"));
        assert!(html.contains("No IDs generated yet"));
    }

    #[tokio::test]
    async fn test_action_redirects_to_page() {
        let response = test_router()
            .oneshot(
                Request::post("/form/action")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("action=single"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_typed_specific_number_survives_other_actions() {
        let router = test_router();

        for action in ["single", "reset"] {
            let response = router
                .clone()
                .oneshot(
                    Request::post("/form/action")
                        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                        .body(Body::from(format!("action={action}&specific_number=42")))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);

            let response = router
                .clone()
                .oneshot(Request::get("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            let html = body_text(response).await;
            assert!(html.contains("name=\"specific_number\" value=\"42\""));
        }
    }

    #[tokio::test]
    async fn test_unknown_action_is_bad_request() {
        let response = test_router()
            .oneshot(
                Request::post("/form/action")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("action=explode"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = test_router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("4001"));
    }
}
