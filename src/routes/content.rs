use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::dto::content_dto::PaperSummary;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_notes(
    State(state): State<AppState>,
    Path((semester, subject)): Path<(String, String)>,
) -> crate::error::Result<Response> {
    let notes = state.note_service.list_for_subject(&semester, &subject).await?;
    let total = notes.len();
    Ok(Json(json!({ "items": notes, "total": total })).into_response())
}

#[axum::debug_handler]
pub async fn get_syllabus(
    State(state): State<AppState>,
    Path((semester, subject)): Path<(String, String)>,
) -> crate::error::Result<Response> {
    match state
        .syllabus_service
        .find_for_subject(&semester, &subject)
        .await?
    {
        Some(entry) => Ok(Json(entry).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "syllabus_not_uploaded",
                "message": "Syllabus not uploaded yet"
            })),
        )
            .into_response()),
    }
}

#[axum::debug_handler]
pub async fn list_papers(
    State(state): State<AppState>,
    Path((semester, subject)): Path<(String, String)>,
) -> crate::error::Result<Response> {
    let papers = state
        .paper_service
        .list_for_subject(&semester, &subject)
        .await?;
    let items: Vec<PaperSummary> = papers.iter().map(PaperSummary::from).collect();
    let total = items.len();
    Ok(Json(json!({ "items": items, "total": total })).into_response())
}

#[axum::debug_handler]
pub async fn get_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> crate::error::Result<Response> {
    let paper = state.paper_service.get(&id).await?;
    Ok(Json(paper).into_response())
}
