use std::env;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, patch, post},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use studyhub_backend::middleware::auth::Claims;
use studyhub_backend::store::{collections, ContentStore, MemoryStore};
use studyhub_backend::AppState;

fn init_test_config() {
    dotenvy::dotenv().ok();
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("STORE_BASE_URL", "http://localhost:9");
    env::set_var("STORE_PROJECT_ID", "studyhub-test");
    env::set_var("STORE_API_KEY", "test-key");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("PUBLIC_RPS", "100");
    env::set_var("ADMIN_RPS", "100");
    let _ = studyhub_backend::config::init_config();
}

fn token_for(sub: &str, role: &str) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp: 4102444800,
        role: Some(role.to_string()),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(b"test_secret_key"),
    )
    .expect("token")
}

fn admin_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/admin/notes",
            post(studyhub_backend::routes::admin::create_note),
        )
        .route(
            "/api/admin/notes/:id",
            patch(studyhub_backend::routes::admin::update_note)
                .delete(studyhub_backend::routes::admin::delete_note),
        )
        .route(
            "/api/admin/syllabus",
            post(studyhub_backend::routes::admin::create_syllabus),
        )
        .route(
            "/api/admin/papers",
            post(studyhub_backend::routes::admin::create_paper),
        )
        .route(
            "/api/admin/mock-tests",
            post(studyhub_backend::routes::admin::create_mock_test),
        )
        .route(
            "/api/admin/mock-tests/:id",
            patch(studyhub_backend::routes::admin::update_mock_test)
                .delete(studyhub_backend::routes::admin::delete_mock_test),
        )
        .layer(axum::middleware::from_fn(
            studyhub_backend::middleware::auth::require_admin,
        ))
        .with_state(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

#[tokio::test]
async fn authoring_requires_a_valid_admin_token() {
    init_test_config();
    let app = admin_router(AppState::new(Arc::new(MemoryStore::new())));
    let payload = json!({
        "semester": "3",
        "subject_id": "c5",
        "unit_title": "Unit 1: Stacks",
        "content": "LIFO structures"
    });

    let (status, body) = send(&app, "POST", "/api/admin/notes", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing_authorization");

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/notes",
        Some("garbage-token"),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");

    let student = token_for("student@studyhub.io", "student");
    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/notes",
        Some(&student),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn note_authoring_normalizes_updates_and_deletes() {
    init_test_config();
    let store = Arc::new(MemoryStore::new());
    let app = admin_router(AppState::new(store.clone()));
    let admin = token_for("admin@studyhub.io", "admin");

    // Create with a messy subject id and check it lands normalized.
    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/notes",
        Some(&admin),
        Some(json!({
            "semester": "3",
            "subject_id": "  C5 ",
            "unit_title": "Unit 1: Stacks",
            "content": "LIFO structures"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["subjectId"], "c5");
    assert_eq!(body["author"], "admin@studyhub.io");
    let note_id = body["id"].as_str().expect("note id").to_string();

    // Patch one field, the rest stays put.
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/admin/notes/{}", note_id),
        Some(&admin),
        Some(json!({ "unit_title": "Unit 1: Stacks and Queues" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["unitTitle"], "Unit 1: Stacks and Queues");
    assert_eq!(body["content"], "LIFO structures");

    // An empty patch is rejected.
    let (status, _body) = send(
        &app,
        "PATCH",
        &format!("/api/admin/notes/{}", note_id),
        Some(&admin),
        Some(json!({ "unit_title": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Delete, then the store no longer has it.
    let (status, _body) = send(
        &app,
        "DELETE",
        &format!("/api/admin/notes/{}", note_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let remaining = store
        .get(collections::NOTES, &note_id)
        .await
        .expect("store read");
    assert!(remaining.is_none());

    let (status, _body) = send(
        &app,
        "DELETE",
        &format!("/api/admin/notes/{}", note_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_note_fields_fail_validation() {
    init_test_config();
    let app = admin_router(AppState::new(Arc::new(MemoryStore::new())));
    let admin = token_for("admin@studyhub.io", "admin");

    let (status, _body) = send(
        &app,
        "POST",
        "/api/admin/notes",
        Some(&admin),
        Some(json!({
            "semester": "3",
            "subject_id": "c5",
            "unit_title": "",
            "content": "x"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn paper_authoring_checks_the_file_link() {
    init_test_config();
    let app = admin_router(AppState::new(Arc::new(MemoryStore::new())));
    let admin = token_for("admin@studyhub.io", "admin");

    let (status, _body) = send(
        &app,
        "POST",
        "/api/admin/papers",
        Some(&admin),
        Some(json!({
            "semester": "5",
            "subject_id": "c11",
            "year": "2023",
            "file_url": "not a url"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/admin/papers",
        Some(&admin),
        Some(json!({
            "semester": "5",
            "subject_id": "c11",
            "year": "2023",
            "file_url": "https://cdn.example.com/c11-2023.pdf"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["body"]["kind"], "file");
}

#[tokio::test]
async fn mock_test_authoring_rejects_unparseable_content() {
    init_test_config();
    let app = admin_router(AppState::new(Arc::new(MemoryStore::new())));
    let admin = token_for("admin@studyhub.io", "admin");

    let (status, _body) = send(
        &app,
        "POST",
        "/api/admin/mock-tests",
        Some(&admin),
        Some(json!({ "title": "Draft", "content": "{ not json" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn an_authored_test_can_be_played_end_to_end() {
    init_test_config();
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store);
    let admin_app = admin_router(state.clone());
    let quiz_app = Router::new()
        .route(
            "/api/mock-tests/:test_id/sessions",
            post(studyhub_backend::routes::quiz::start_session),
        )
        .route(
            "/api/sessions/:id/select",
            post(studyhub_backend::routes::quiz::select_option),
        )
        .route(
            "/api/sessions/:id/advance",
            post(studyhub_backend::routes::quiz::advance),
        )
        .route(
            "/api/sessions/:id",
            get(studyhub_backend::routes::quiz::get_session),
        )
        .with_state(state);
    let admin = token_for("admin@studyhub.io", "admin");

    let (status, body) = send(
        &admin_app,
        "POST",
        "/api/admin/mock-tests",
        Some(&admin),
        Some(json!({
            "title": "C7 Revision",
            "subject_id": "C7",
            "semester": "3",
            "content": r#"[{"id":1,"question":"OSI layers?","options":["5","7"],"answer":1}]"#
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["subjectId"], "c7");
    assert_eq!(body["questionCount"], 1);
    let test_id = body["id"].as_str().expect("test id").to_string();

    let (status, body) = send(
        &quiz_app,
        "POST",
        &format!("/api/mock-tests/{}/sessions", test_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = body["session_id"].as_str().expect("session id").to_string();

    let (status, _body) = send(
        &quiz_app,
        "POST",
        &format!("/api/sessions/{}/select", session_id),
        None,
        Some(json!({ "option": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &quiz_app,
        "POST",
        &format!("/api/sessions/{}/advance", session_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "finished");
    assert_eq!(body["result"]["percentage"], 100);
}
