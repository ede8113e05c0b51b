pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::builder::handlers as builder;
use crate::decoder::handlers as decoder;
use crate::ingest::handlers as ingest;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Decoder
        .route("/api/v1/styles", get(decoder::handle_list_styles))
        .route("/api/v1/samples", get(decoder::handle_list_samples))
        .route("/api/v1/titles", get(decoder::handle_generate_title))
        .route("/api/v1/decode", post(decoder::handle_decode))
        .route("/api/v1/ingest", post(ingest::handle_ingest))
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", get(session::handle_get_session))
        .route(
            "/api/v1/sessions/:id/buzzwords",
            get(decoder::handle_list_buzzwords).post(decoder::handle_add_buzzword),
        )
        .route(
            "/api/v1/sessions/:id/export",
            get(session::handle_export_session),
        )
        .route(
            "/api/v1/sessions/:id/import",
            post(session::handle_import_session),
        )
        .route(
            "/api/v1/sessions/:id/save",
            post(session::handle_save_session),
        )
        .route(
            "/api/v1/sessions/:id/load",
            post(session::handle_load_session),
        )
        .route("/api/v1/share", get(session::handle_open_share_link))
        // Resume builder
        .route("/api/v1/builder/match", post(builder::handle_match))
        .route("/api/v1/builder/render", post(builder::handle_render))
        .route("/api/v1/builder/export", post(builder::handle_export))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::builder::keywords::Stopwords;
    use crate::config::Config;
    use crate::decoder::dictionary::BuzzwordDictionary;
    use crate::session::store::SessionStore;

    fn test_app(session_dir: &Path) -> Router {
        let config = Config {
            buzzwords_path: "unused.json".into(),
            stopwords_path: None,
            session_dir: session_dir.to_path_buf(),
            keyword_top_n: 20,
            port: 0,
            rust_log: "info".to_string(),
        };
        build_router(AppState {
            config,
            dictionary: Arc::new(BuzzwordDictionary::from_entries([
                ("synergy", "teamwork"),
                ("rockstar", "good employee"),
            ])),
            stopwords: Arc::new(Stopwords::default()),
            sessions: SessionStore::new(),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn send_raw(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "text/plain")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(&test_app(dir.path()), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_decode_plain_english() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/decode",
            Some(json!({"text": "We value synergy.", "style": "Plain English"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["decoded_text"], "We value teamwork.");
        assert_eq!(body["score"], 33.33);
        assert_eq!(
            body["highlighted_html"],
            "We value <mark title='teamwork'>synergy</mark>."
        );
        assert_eq!(body["bundle"]["input"], "We value synergy.");
        assert!(body["share_url"]
            .as_str()
            .unwrap()
            .starts_with("/api/v1/share?state="));
    }

    #[tokio::test]
    async fn test_decode_rejects_blank_text() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            &test_app(dir.path()),
            "POST",
            "/api/v1/decode",
            Some(json!({"text": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_decode_sample_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = send(
            &test_app(dir.path()),
            "POST",
            "/api/v1/decode",
            Some(json!({"sample": "Startup Operations Manager", "style": "Gen Z"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["decoded_text"]
            .as_str()
            .unwrap()
            .contains("rockstar (lol basically: good employee)"));
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let id = uuid::Uuid::new_v4();
        let (status, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (status, _) = send(
            &app,
            "POST",
            "/api/v1/decode",
            Some(json!({"text": "hello", "session_id": id})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_session_dictionary_export_and_share() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());

        let (status, created) = send(&app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["session_id"].as_str().unwrap().to_string();

        let (status, added) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/buzzwords"),
            Some(json!({"phrase": "  Ninja ", "explanation": "skilled worker"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(added["phrase"], "ninja");
        assert_eq!(added["buzzword_count"], 3);

        let (_, listed) = send(&app, "GET", &format!("/api/v1/sessions/{id}/buzzwords"), None).await;
        assert_eq!(listed[0]["phrase"], "ninja");
        assert_eq!(listed.as_array().unwrap().len(), 3);

        let (_, decoded) = send(
            &app,
            "POST",
            "/api/v1/decode",
            Some(json!({"text": "A ninja coder", "session_id": id})),
        )
        .await;
        assert_eq!(decoded["decoded_text"], "A skilled worker coder");

        // other sessions and sessionless decodes keep the base dictionary
        let (_, plain) = send(
            &app,
            "POST",
            "/api/v1/decode",
            Some(json!({"text": "A ninja coder"})),
        )
        .await;
        assert_eq!(plain["decoded_text"], "A ninja coder");

        let (status, exported) =
            send(&app, "GET", &format!("/api/v1/sessions/{id}/export"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(exported["input"], "A ninja coder");

        let share = decoded["share_url"].as_str().unwrap();
        let (status, opened) = send(&app, "GET", share, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(opened["bundle"]["decoded"], "A skilled worker coder");
        assert!(opened.get("warning").is_none());
    }

    #[tokio::test]
    async fn test_malformed_share_link_keeps_current_state() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let (_, created) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = created["session_id"].as_str().unwrap().to_string();
        send(
            &app,
            "POST",
            "/api/v1/decode",
            Some(json!({"text": "Our synergy", "session_id": id})),
        )
        .await;

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/v1/share?state=bm90LWpzb24&session_id={id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["warning"].as_str().unwrap().contains("shared session"));
        assert_eq!(body["bundle"]["input"], "Our synergy");
    }

    #[tokio::test]
    async fn test_import_and_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let (_, created) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = created["session_id"].as_str().unwrap().to_string();

        let (status, body) = send_raw(
            &app,
            &format!("/api/v1/sessions/{id}/import"),
            r#"{"input": "Imported text", "style": "Haiku"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["bundle"]["style"], "Haiku");

        let (status, body) =
            send_raw(&app, &format!("/api/v1/sessions/{id}/import"), "{broken").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["warning"].is_string());
        assert_eq!(body["bundle"]["input"], "Imported text");

        let (status, saved) = send(&app, "POST", &format!("/api/v1/sessions/{id}/save"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(saved["path"].as_str().unwrap().ends_with(".json"));

        let (status, loaded) = send(&app, "POST", &format!("/api/v1/sessions/{id}/load"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(loaded["bundle"]["input"], "Imported text");
    }

    #[tokio::test]
    async fn test_save_without_result_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let (_, created) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = created["session_id"].as_str().unwrap().to_string();

        let (status, _) = send(&app, "POST", &format!("/api/v1/sessions/{id}/save"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, "POST", &format!("/api/v1/sessions/{id}/load"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_builder_match_and_render() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/builder/match",
            Some(json!({
                "job_text": "Python SQL leadership",
                "resume_text": "Python leadership mentor",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["match_percent"], 66.67);
        assert_eq!(body["missing"], json!(["sql"]));
        assert_eq!(body["sections"][0]["title"], "Leadership Experience");

        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/builder/render",
            Some(json!({"sections": [{"title": "Skills", "content": "Rust"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["markdown"].as_str().unwrap().contains("## Skills\nRust"));
    }

    #[tokio::test]
    async fn test_builder_export_returns_docx() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/builder/export")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"sections": [{"title": "Skills", "content": ["Rust", "SQL"]}]}).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            crate::builder::docx::DOCX_CONTENT_TYPE
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[tokio::test]
    async fn test_styles_and_samples() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let (_, styles) = send(&app, "GET", "/api/v1/styles", None).await;
        assert_eq!(styles.as_array().unwrap().len(), 7);
        let (_, samples) = send(&app, "GET", "/api/v1/samples", None).await;
        assert_eq!(samples.as_array().unwrap().len(), 4);
        let (status, title) = send(&app, "GET", "/api/v1/titles?tier=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(title["title"].is_string());
    }

    #[tokio::test]
    async fn test_import_non_utf8_body_keeps_current_state() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let (_, created) = send(&app, "POST", "/api/v1/sessions", None).await;
        let id = created["session_id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/sessions/{id}/import");

        let (status, _) = send_raw(&app, &uri, r#"{"input": "Imported text"}"#).await;
        assert_eq!(status, StatusCode::OK);

        let request = Request::builder()
            .method("POST")
            .uri(&uri)
            .header("content-type", "application/json")
            .body(Body::from(vec![0xff, 0xfe, b'{']))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["warning"].as_str().unwrap().starts_with("Could not load session file"));
        assert_eq!(body["bundle"]["input"], "Imported text");
    }

    async fn send_multipart(app: &Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/ingest")
            .header("content-type", "multipart/form-data; boundary=XBOUNDARY")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_ingest_text_upload() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let body = concat!(
            "--XBOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"file\"; filename=\"cv.txt\"\r\n",
            "Content-Type: text/plain\r\n\r\n",
            "Led the team\r\n",
            "--XBOUNDARY--\r\n",
        );

        let (status, out) = send_multipart(&app, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(out["text"], "Led the team");
        assert!(out.get("warning").is_none());
    }

    #[tokio::test]
    async fn test_ingest_unsupported_upload_warns() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let body = concat!(
            "--XBOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"file\"; filename=\"cv.png\"\r\n",
            "Content-Type: image/png\r\n\r\n",
            "PNG\r\n",
            "--XBOUNDARY--\r\n",
        );

        let (status, out) = send_multipart(&app, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(out["text"], "");
        assert!(out["warning"].as_str().unwrap().contains("Unsupported"));
    }

    #[tokio::test]
    async fn test_ingest_without_file_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(dir.path());
        let body = concat!(
            "--XBOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"other\"\r\n\r\n",
            "hello\r\n",
            "--XBOUNDARY--\r\n",
        );

        let (status, out) = send_multipart(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(out["error"]["code"], "VALIDATION_ERROR");
    }
}
