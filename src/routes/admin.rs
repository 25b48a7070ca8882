use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Extension,
};
use validator::Validate;

use crate::dto::admin_dto::{
    CreateMockTestPayload, CreateNotePayload, CreatePaperPayload, CreateSyllabusPayload,
    UpdateMockTestPayload, UpdateNotePayload, UpdatePaperPayload, UpdateSyllabusPayload,
};
use crate::middleware::auth::Claims;
use crate::AppState;

#[axum::debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateNotePayload>,
) -> crate::error::Result<Response> {
    payload.validate()?;
    let note = state.authoring_service.create_note(payload, &claims.sub).await?;
    Ok((StatusCode::CREATED, Json(note)).into_response())
}

#[axum::debug_handler]
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNotePayload>,
) -> crate::error::Result<Response> {
    let note = state.authoring_service.update_note(&id, payload).await?;
    Ok(Json(note).into_response())
}

#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> crate::error::Result<Response> {
    state.authoring_service.delete_note(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[axum::debug_handler]
pub async fn create_syllabus(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateSyllabusPayload>,
) -> crate::error::Result<Response> {
    payload.validate()?;
    let entry = state
        .authoring_service
        .create_syllabus(payload, &claims.sub)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[axum::debug_handler]
pub async fn update_syllabus(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSyllabusPayload>,
) -> crate::error::Result<Response> {
    let entry = state.authoring_service.update_syllabus(&id, payload).await?;
    Ok(Json(entry).into_response())
}

#[axum::debug_handler]
pub async fn delete_syllabus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> crate::error::Result<Response> {
    state.authoring_service.delete_syllabus(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[axum::debug_handler]
pub async fn create_paper(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreatePaperPayload>,
) -> crate::error::Result<Response> {
    payload.validate()?;
    let paper = state
        .authoring_service
        .create_paper(payload, &claims.sub)
        .await?;
    Ok((StatusCode::CREATED, Json(paper)).into_response())
}

#[axum::debug_handler]
pub async fn update_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePaperPayload>,
) -> crate::error::Result<Response> {
    let paper = state.authoring_service.update_paper(&id, payload).await?;
    Ok(Json(paper).into_response())
}

#[axum::debug_handler]
pub async fn delete_paper(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> crate::error::Result<Response> {
    state.authoring_service.delete_paper(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[axum::debug_handler]
pub async fn create_mock_test(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateMockTestPayload>,
) -> crate::error::Result<Response> {
    payload.validate()?;
    let summary = state
        .authoring_service
        .create_mock_test(payload, &claims.sub)
        .await?;
    Ok((StatusCode::CREATED, Json(summary)).into_response())
}

#[axum::debug_handler]
pub async fn update_mock_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMockTestPayload>,
) -> crate::error::Result<Response> {
    let summary = state.authoring_service.update_mock_test(&id, payload).await?;
    Ok(Json(summary).into_response())
}

#[axum::debug_handler]
pub async fn delete_mock_test(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> crate::error::Result<Response> {
    state.authoring_service.delete_mock_test(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
