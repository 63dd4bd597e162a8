pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::auth::handlers as auth;
use crate::chat::handlers as chat;
use crate::knowledge::handlers as catalog;
use crate::resume::handlers as resume;
use crate::state::AppState;

// Room for multipart boundaries and the text fields next to the file.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/register", post(auth::handle_register))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        // Catalog
        .route("/api/v1/catalog/careers", get(catalog::handle_list_careers))
        .route("/api/v1/catalog/resume-tips", get(catalog::handle_resume_tips))
        .route(
            "/api/v1/catalog/interview-tips",
            get(catalog::handle_interview_tips),
        )
        .route("/api/v1/catalog/skills", get(catalog::handle_skill_paths))
        // Resumes
        .route(
            "/api/v1/resumes",
            post(resume::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resumes/current", get(resume::handle_current_resume))
        .route("/api/v1/resumes/analyze", post(resume::handle_analyze))
        // Advice
        .route(
            "/api/v1/advice/job-requirements",
            post(advisor::handle_job_requirements),
        )
        .route("/api/v1/advice/career-path", post(advisor::handle_career_path))
        // Chat
        .route("/api/v1/chat", post(chat::handle_send_message))
        .route("/api/v1/chat/history", get(chat::handle_chat_history))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, StoreBackend};
    use crate::db::MemoryStore;

    const BOUNDARY: &str = "vidya-test-boundary";

    const RESUME_TEXT: &str = "Asha Rao\n\
asha.rao@example.com | (555) 123-4567\n\
\n\
Skills\n\
Python, SQL, Machine Learning\n\
\n\
Education\n\
B.S. Computer Science, State University\n\
\n\
Experience\n\
Data Analyst, Acme Corp\n\
Built dashboards\n";

    fn test_state() -> AppState {
        let config = Config {
            port: 0,
            rust_log: "debug".into(),
            data_dir: PathBuf::from("unused"),
            store_backend: StoreBackend::Memory,
            max_upload_bytes: 1024,
            chat_history_limit: 50,
            password_pepper: "pepper".into(),
        };
        AppState::new(config, Arc::new(MemoryStore::default()))
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    fn upload_request(token: &str, filename: &str, contents: &str, skills: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
Content-Disposition: form-data; name=\"skills\"\r\n\r\n\
{skills}\r\n\
--{BOUNDARY}\r\n\
Content-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\n\
Content-Type: text/plain\r\n\r\n\
{contents}\r\n\
--{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap()
    }

    async fn register(app: &Router, email: &str) -> String {
        let response = send(
            app,
            json_request(
                "POST",
                "/api/v1/auth/register",
                None,
                json!({"email": email, "name": "Asha", "password": "correct horse"}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let response = send(&app, get_request("/health", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_catalog_is_public() {
        let app = build_router(test_state());
        let response = send(&app, get_request("/api/v1/catalog/careers", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let careers = body_json(response).await;
        assert_eq!(careers.as_array().unwrap().len(), 5);
        assert_eq!(careers[0]["name"], "Software Engineer");
    }

    #[tokio::test]
    async fn test_register_login_logout() {
        let app = build_router(test_state());
        let token = register(&app, "Asha@Example.com").await;

        let duplicate = send(
            &app,
            json_request(
                "POST",
                "/api/v1/auth/register",
                None,
                json!({"email": "asha@example.com", "name": "A", "password": "another one"}),
            ),
        )
        .await;
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(duplicate).await["error"]["code"], "CONFLICT");

        let bad_login = send(
            &app,
            json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({"email": "asha@example.com", "password": "wrong password"}),
            ),
        )
        .await;
        assert_eq!(bad_login.status(), StatusCode::UNAUTHORIZED);

        let login = send(
            &app,
            json_request(
                "POST",
                "/api/v1/auth/login",
                None,
                json!({"email": " ASHA@example.com", "password": "correct horse"}),
            ),
        )
        .await;
        assert_eq!(login.status(), StatusCode::OK);
        assert_eq!(body_json(login).await["user"]["email"], "asha@example.com");

        let logout = send(
            &app,
            json_request("POST", "/api/v1/auth/logout", Some(&token), json!({})),
        )
        .await;
        assert_eq!(logout.status(), StatusCode::NO_CONTENT);

        let after = send(&app, get_request("/api/v1/chat/history", Some(&token))).await;
        assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_protected_routes_need_token() {
        let app = build_router(test_state());
        for uri in ["/api/v1/resumes/current", "/api/v1/chat/history"] {
            let response = send(&app, get_request(uri, None)).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            let response = send(&app, get_request(uri, Some("not-a-token"))).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn test_analyze_without_login() {
        let app = build_router(test_state());
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/v1/resumes/analyze",
                None,
                json!({"text": RESUME_TEXT}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["extracted_data"]["email"], "asha.rao@example.com");
        assert_eq!(
            body["extracted_data"]["skills"],
            json!(["Python", "SQL", "Machine Learning"])
        );
        assert!(body["suggestions"]["keywords"].is_array());
    }

    #[tokio::test]
    async fn test_upload_then_fetch_current_resume() {
        let app = build_router(test_state());
        let token = register(&app, "asha@example.com").await;

        let missing = send(&app, get_request("/api/v1/resumes/current", Some(&token))).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let upload = send(
            &app,
            upload_request(&token, "asha.txt", RESUME_TEXT, "Docker, , Kubernetes"),
        )
        .await;
        assert_eq!(upload.status(), StatusCode::OK);
        let body = body_json(upload).await;
        assert_eq!(body["filename"], "asha.txt");
        assert_eq!(body["extracted_data"]["phone"], "(555) 123-4567");

        let current = send(&app, get_request("/api/v1/resumes/current", Some(&token))).await;
        assert_eq!(current.status(), StatusCode::OK);
        let stored = body_json(current).await;
        assert_eq!(stored["filename"], "asha.txt");
        assert_eq!(stored["provided_skills"], json!(["Docker", "Kubernetes"]));
    }

    #[tokio::test]
    async fn test_upload_rejections() {
        let app = build_router(test_state());
        let token = register(&app, "asha@example.com").await;

        let wrong_type = send(&app, upload_request(&token, "cv.exe", "MZ", "")).await;
        assert_eq!(wrong_type.status(), StatusCode::BAD_REQUEST);

        let too_big = "x".repeat(2048);
        let oversized = send(&app, upload_request(&token, "cv.txt", &too_big, "")).await;
        assert_eq!(oversized.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let unreadable = send(&app, upload_request(&token, "cv.pdf", "not a pdf", "")).await;
        assert_eq!(unreadable.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_job_requirements_uses_stored_skills() {
        let app = build_router(test_state());
        let token = register(&app, "asha@example.com").await;
        send(
            &app,
            upload_request(&token, "asha.txt", RESUME_TEXT, "Statistics"),
        )
        .await;

        let response = send(
            &app,
            json_request(
                "POST",
                "/api/v1/advice/job-requirements",
                Some(&token),
                json!({"job_title": "Data Scientist"}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["missing_skills"], json!([]));
        assert_eq!(body["company"], "");

        let blank = send(
            &app,
            json_request(
                "POST",
                "/api/v1/advice/job-requirements",
                Some(&token),
                json!({"job_title": "  "}),
            ),
        )
        .await;
        assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_career_path_endpoint() {
        let app = build_router(test_state());
        let token = register(&app, "asha@example.com").await;
        let response = send(
            &app,
            json_request(
                "POST",
                "/api/v1/advice/career-path",
                Some(&token),
                json!({"skills": ["Python", "SQL"], "interests": ""}),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["suggestions"][0]["career"], "Data Scientist");
        assert_eq!(body["next_steps"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_chat_reply_and_history() {
        let app = build_router(test_state());
        let token = register(&app, "asha@example.com").await;

        let blank = send(
            &app,
            json_request("POST", "/api/v1/chat", Some(&token), json!({"message": "   "})),
        )
        .await;
        assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

        let reply = send(
            &app,
            json_request(
                "POST",
                "/api/v1/chat",
                Some(&token),
                json!({"message": "How should I prepare for an interview?"}),
            ),
        )
        .await;
        assert_eq!(reply.status(), StatusCode::OK);
        let body = body_json(reply).await;
        assert_eq!(body["role"], "assistant");
        assert_eq!(body["type"], "text");

        send(
            &app,
            json_request("POST", "/api/v1/chat", Some(&token), json!({"message": "hello"})),
        )
        .await;

        let history = send(&app, get_request("/api/v1/chat/history", Some(&token))).await;
        let messages = body_json(history).await;
        assert_eq!(messages.as_array().unwrap().len(), 4);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[1]["role"], "assistant");

        let limited = send(&app, get_request("/api/v1/chat/history?limit=1", Some(&token))).await;
        let messages = body_json(limited).await;
        assert_eq!(messages.as_array().unwrap().len(), 1);
        assert_eq!(messages[0]["role"], "assistant");
    }

    #[tokio::test]
    async fn test_chat_resume_advice_is_personalised_after_upload() {
        let app = build_router(test_state());
        let token = register(&app, "asha@example.com").await;
        send(&app, upload_request(&token, "asha.txt", RESUME_TEXT, "")).await;

        let reply = send(
            &app,
            json_request(
                "POST",
                "/api/v1/chat",
                Some(&token),
                json!({"message": "Can you review my resume?"}),
            ),
        )
        .await;
        let body = body_json(reply).await;
        assert!(body["content"]
            .as_str()
            .unwrap()
            .contains("Current skills: Python, SQL, Machine Learning"));

        let history = send(&app, get_request("/api/v1/chat/history", Some(&token))).await;
        assert_eq!(body_json(history).await[0]["resume_context"], "asha.txt");
    }
}
