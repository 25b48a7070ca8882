use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use studyhub_backend::store::{collections, ContentStore, MemoryStore};
use studyhub_backend::AppState;

fn content_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/catalog/semesters",
            get(studyhub_backend::routes::catalog::list_semesters),
        )
        .route(
            "/api/catalog/semesters/:id",
            get(studyhub_backend::routes::catalog::get_semester),
        )
        .route(
            "/api/semesters/:id/subjects/:subject/notes",
            get(studyhub_backend::routes::content::list_notes),
        )
        .route(
            "/api/semesters/:id/subjects/:subject/syllabus",
            get(studyhub_backend::routes::content::get_syllabus),
        )
        .route(
            "/api/semesters/:id/subjects/:subject/papers",
            get(studyhub_backend::routes::content::list_papers),
        )
        .route(
            "/api/papers/:id",
            get(studyhub_backend::routes::content::get_paper),
        )
        .route(
            "/api/mock-tests",
            get(studyhub_backend::routes::mock_tests::list_mock_tests),
        )
        .route("/api/search", get(studyhub_backend::routes::search::search))
        .layer(axum::middleware::from_fn_with_state(
            studyhub_backend::middleware::rate_limit::limiter(100),
            studyhub_backend::middleware::rate_limit::rps_guard,
        ))
        .with_state(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

#[tokio::test]
async fn the_catalog_lists_all_six_semesters() {
    let app = content_router(AppState::new(Arc::new(MemoryStore::new())));

    let (status, body) = get_json(&app, "/api/catalog/semesters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 6);
    assert_eq!(body["semesters"][0]["title"], "Semester 1");
    assert_eq!(body["semesters"][0]["subjects"][0]["id"], "c1");

    let (status, body) = get_json(&app, "/api/catalog/semesters/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Semester 3");
    assert_eq!(body["subjects"][0]["name"], "C5: Data Structures");

    let (status, body) = get_json(&app, "/api/catalog/semesters/9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "semester_not_found");
}

#[tokio::test]
async fn notes_listing_is_sorted_by_unit_title() {
    let store = Arc::new(MemoryStore::new());
    for unit in ["Unit 3: Trees", "Unit 1: Arrays", "Unit 2: Lists"] {
        store
            .create(
                collections::NOTES,
                json!({ "semester": "3", "subjectId": "c5", "unitTitle": unit, "content": "x" }),
            )
            .await
            .expect("seed note");
    }
    let app = content_router(AppState::new(store));

    let (status, body) = get_json(&app, "/api/semesters/3/subjects/c5/notes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"][0]["unitTitle"], "Unit 1: Arrays");
    assert_eq!(body["items"][1]["unitTitle"], "Unit 2: Lists");
    assert_eq!(body["items"][2]["unitTitle"], "Unit 3: Trees");
}

#[tokio::test]
async fn syllabus_lookup_returns_the_entry_or_a_clear_404() {
    let store = Arc::new(MemoryStore::new());
    store
        .create(
            collections::SYLLABUS,
            json!({ "semester": "3", "subjectId": "c5", "content": "Unit I: Stacks and Queues" }),
        )
        .await
        .expect("seed syllabus");
    let app = content_router(AppState::new(store));

    let (status, body) = get_json(&app, "/api/semesters/3/subjects/c5/syllabus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Unit I: Stacks and Queues");

    let (status, body) = get_json(&app, "/api/semesters/3/subjects/c6/syllabus").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "syllabus_not_uploaded");
}

#[tokio::test]
async fn papers_list_newest_year_first_and_resolve_bodies() {
    let store = Arc::new(MemoryStore::new());
    for (year, file_url) in [("2022", ""), ("2024", "https://cdn.example.com/2024.pdf"), ("2023", "")] {
        store
            .create(
                collections::PYQ,
                json!({
                    "semester": "5",
                    "subjectId": "c11",
                    "year": year,
                    "content": if file_url.is_empty() { "<p>solutions</p>" } else { "" },
                    "fileUrl": file_url
                }),
            )
            .await
            .expect("seed paper");
    }
    let app = content_router(AppState::new(store));

    let (status, body) = get_json(&app, "/api/semesters/5/subjects/c11/papers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"][0]["year"], "2024");
    assert_eq!(body["items"][0]["hasFile"], true);
    assert_eq!(body["items"][0]["hasSolutions"], false);
    assert_eq!(body["items"][1]["year"], "2023");
    assert_eq!(body["items"][1]["hasFile"], false);
    assert_eq!(body["items"][1]["hasSolutions"], true);
    assert_eq!(body["items"][2]["year"], "2022");

    let paper_id = body["items"][0]["id"].as_str().expect("paper id").to_string();
    let (status, body) = get_json(&app, &format!("/api/papers/{}", paper_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["body"]["kind"], "file");
    assert_eq!(body["body"]["url"], "https://cdn.example.com/2024.pdf");

    let (status, _body) = get_json(&app, "/api/papers/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mock_test_listing_is_sorted_and_tolerates_broken_content() {
    let store = Arc::new(MemoryStore::new());
    store
        .create(
            collections::MOCK_TESTS,
            json!({
                "title": "Networking Quiz",
                "duration": "30 mins",
                "difficulty": "Hard",
                "semester": "3",
                "subjectId": "c7",
                "content": r#"[{"id":1},{"id":2}]"#
            }),
        )
        .await
        .expect("seed test");
    store
        .create(collections::MOCK_TESTS, json!({ "content": "broken" }))
        .await
        .expect("seed test");
    let app = content_router(AppState::new(store));

    let (status, body) = get_json(&app, "/api/mock-tests").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"][0]["title"], "Networking Quiz");
    assert_eq!(body["items"][0]["questionCount"], 2);
    assert_eq!(body["items"][1]["title"], "Untitled Test");
    assert_eq!(body["items"][1]["duration"], "N/A");
    assert_eq!(body["items"][1]["difficulty"], "Medium");
    assert_eq!(body["items"][1]["questionCount"], 0);
}

#[tokio::test]
async fn search_returns_catalog_hits_before_upload_hits() {
    let store = Arc::new(MemoryStore::new());
    store
        .create(
            collections::NOTES,
            json!({
                "semester": "2",
                "subjectId": "c3",
                "unitTitle": "JAVA classes and objects"
            }),
        )
        .await
        .expect("seed note");
    let app = content_router(AppState::new(store));

    let (status, body) = get_json(&app, "/api/search?q=java").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "java");
    let results = body["results"].as_array().expect("results");
    assert!(results.len() >= 2);
    assert_eq!(results[0]["kind"], "subject");
    assert_eq!(results[0]["title"], "C3: Programming in JAVA");
    assert_eq!(results[0]["link"], "/semester/2/c3?view=syllabus");
    let note = results.last().expect("note hit");
    assert_eq!(note["kind"], "note");
    assert_eq!(note["subtitle"], "Note • Sem 2 • C3");

    let (status, body) = get_json(&app, "/api/search?q=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}
