pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let photo_limit = state.config.max_photo_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        // Sessions
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::handle_get_session).delete(handlers::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/edits",
            post(handlers::handle_apply_edits),
        )
        .route(
            "/api/v1/sessions/:id/photo",
            put(handlers::handle_upload_photo)
                .delete(handlers::handle_remove_photo)
                // multipart framing needs headroom over the raw image size
                .layer(DefaultBodyLimit::max(photo_limit + 64 * 1024)),
        )
        .route("/api/v1/sessions/:id/render", get(handlers::handle_render))
        .route("/api/v1/sessions/:id/polish", post(handlers::handle_polish))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::gateway::fake::FakeGateway;
    use crate::gateway::{DisabledGateway, TextGateway};
    use crate::session::SessionStore;

    fn test_config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    fn app_with(gateway: Arc<dyn TextGateway>) -> Router {
        build_router(AppState {
            sessions: SessionStore::new(),
            gateway,
            config: test_config(),
        })
    }

    fn app() -> Router {
        app_with(Arc::new(DisabledGateway))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&value).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.expect("route executes")
    }

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn start_session(app: &Router) -> String {
        let response = send(app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = read_json(response).await;
        payload["sessionId"].as_str().unwrap().to_string()
    }

    fn multipart_photo(content_type: &str, bytes: &[u8]) -> (String, Vec<u8>) {
        let boundary = "quickbio-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"photo\"; filename=\"me.png\"\r\n",
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
        (format!("multipart/form-data; boundary={boundary}"), body)
    }

    async fn upload(app: &Router, id: &str, content_type: &str, bytes: &[u8]) -> Response {
        let (header_value, body) = multipart_photo(content_type, bytes);
        let request = Request::builder()
            .method(Method::PUT)
            .uri(format!("/api/v1/sessions/{id}/photo"))
            .header(header::CONTENT_TYPE, header_value)
            .body(Body::from(body))
            .unwrap();
        app.clone().oneshot(request).await.expect("route executes")
    }

    #[tokio::test]
    async fn test_health_reports_service() {
        let response = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["service"], "quickbio-api");
    }

    #[tokio::test]
    async fn test_new_session_starts_from_seed() {
        let app = app();
        let response = send(&app, Method::POST, "/api/v1/sessions", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let payload = read_json(response).await;
        assert!(Uuid::parse_str(payload["sessionId"].as_str().unwrap()).is_ok());
        assert_eq!(payload["document"]["personalDetails"]["nationality"], "Indian");
        assert_eq!(payload["document"]["template"], "elegant");
    }

    #[tokio::test]
    async fn test_single_and_batched_edits() {
        let app = app();
        let id = start_session(&app).await;

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/edits"),
            Some(json!({ "op": "set_scalar", "field": "name", "value": "Asha Verma" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["document"]["identity"]["name"], "Asha Verma");
        assert_eq!(payload["outcomes"][0]["status"], "changed");

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/edits"),
            Some(json!({ "edits": [
                { "op": "set_skills_from_text", "text": "Tally, MS Excel, , Typing" },
                { "op": "remove_skill", "index": 9 }
            ]})),
        )
        .await;
        let payload = read_json(response).await;
        assert_eq!(
            payload["document"]["skills"],
            json!(["Tally", "MS Excel", "Typing"])
        );
        assert_eq!(payload["outcomes"][1]["status"], "ignored");
        assert_eq!(payload["outcomes"][1]["reason"]["kind"], "index_out_of_range");

        let response = send(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        let document = read_json(response).await;
        assert_eq!(document["identity"]["name"], "Asha Verma");
        assert_eq!(document["skills"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_edit_is_rejected() {
        let app = app();
        let id = start_session(&app).await;
        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/edits"),
            Some(json!({ "op": "set_scalar", "field": "salary", "value": "1" })),
        )
        .await;
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = app();
        let uri = format!("/api/v1/sessions/{}", Uuid::new_v4());
        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = read_json(response).await;
        assert_eq!(payload["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_ended_session_is_gone() {
        let app = app();
        let id = start_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}");
        let response = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = send(&app, Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_render_uses_query_template_without_changing_selection() {
        let app = app();
        let id = start_session(&app).await;

        let response = send(
            &app,
            Method::GET,
            &format!("/api/v1/sessions/{id}/render?template=Classic"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let rendered = read_json(response).await;
        assert_eq!(rendered["template"], "classic");
        assert_eq!(rendered["page"]["widthMm"], 210);

        let response = send(
            &app,
            Method::GET,
            &format!("/api/v1/sessions/{id}/render"),
            None,
        )
        .await;
        let rendered = read_json(response).await;
        assert_eq!(rendered["template"], "elegant");
    }

    #[tokio::test]
    async fn test_render_rejects_unknown_template() {
        let app = app();
        let id = start_session(&app).await;
        let response = send(
            &app,
            Method::GET,
            &format!("/api/v1/sessions/{id}/render?template=fancy"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_templates_are_listed_in_order() {
        let response = send(&app(), Method::GET, "/api/v1/templates", None).await;
        let payload = read_json(response).await;
        assert_eq!(
            payload,
            json!(["elegant", "classic", "modern", "professional"])
        );
    }

    #[tokio::test]
    async fn test_photo_upload_and_removal() {
        let app = app();
        let id = start_session(&app).await;

        let response = upload(&app, &id, "image/png", &[0x89, b'P', b'N', b'G']).await;
        assert_eq!(response.status(), StatusCode::OK);
        let document = read_json(response).await;
        assert_eq!(document["photo"], "data:image/png;base64,iVBORw==");

        let response = send(
            &app,
            Method::DELETE,
            &format!("/api/v1/sessions/{id}/photo"),
            None,
        )
        .await;
        let document = read_json(response).await;
        assert_eq!(document["photo"], Value::Null);
    }

    #[tokio::test]
    async fn test_non_image_upload_is_unprocessable() {
        let app = app();
        let id = start_session(&app).await;
        let response = upload(&app, &id, "application/pdf", b"%PDF-1.4").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = send(&app, Method::GET, &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(read_json(response).await["photo"], Value::Null);
    }

    #[tokio::test]
    async fn test_polish_applies_successful_rewrites() {
        let gateway = Arc::new(FakeGateway::replying(
            "  I hereby declare that the above details are true.  ",
            "Hindi, English",
        ));
        let app = app_with(gateway.clone());
        let id = start_session(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/edits"),
            Some(json!({ "edits": [
                { "op": "set_scalar", "field": "declaration", "value": "all true" },
                { "op": "set_personal", "field": "languages", "value": "hindi,english" }
            ]})),
        )
        .await;

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/polish"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["declaration"]["status"], "improved");
        assert_eq!(
            payload["document"]["declaration"],
            "I hereby declare that the above details are true."
        );
        assert_eq!(
            payload["document"]["personalDetails"]["languages"],
            "Hindi, English"
        );
        assert_eq!(gateway.calls(), 2);
    }

    #[tokio::test]
    async fn test_polish_without_gateway_keeps_document() {
        let app = app();
        let id = start_session(&app).await;
        send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/edits"),
            Some(json!({ "op": "set_scalar", "field": "declaration", "value": "all true" })),
        )
        .await;

        let response = send(
            &app,
            Method::POST,
            &format!("/api/v1/sessions/{id}/polish"),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["declaration"]["status"], "failed");
        assert_eq!(payload["languages"]["status"], "skipped");
        assert_eq!(payload["document"]["declaration"], "all true");
    }
}
