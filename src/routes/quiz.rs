use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::dto::quiz_dto::SelectOptionRequest;
use crate::error::Error;
use crate::AppState;

#[axum::debug_handler]
pub async fn start_session(
    State(state): State<AppState>,
    Path(test_id): Path<String>,
) -> crate::error::Result<Response> {
    match state.session_service.start(&test_id).await {
        Ok(view) => Ok((StatusCode::CREATED, Json(view)).into_response()),
        Err(err) if matches!(err, Error::NotFound(_) | Error::InvalidQuestionSet(_)) => {
            tracing::warn!("Mock test '{}' is not ready to start: {}", test_id, err);
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "test_not_ready",
                    "message": "This test might be empty or in a wrong format"
                })),
            )
                .into_response())
        }
        Err(err) => Err(err),
    }
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let view = state.session_service.view(id)?;
    Ok(Json(view).into_response())
}

#[axum::debug_handler]
pub async fn select_option(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SelectOptionRequest>,
) -> crate::error::Result<Response> {
    let view = state.session_service.select(id, payload.option)?;
    Ok(Json(view).into_response())
}

#[axum::debug_handler]
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let view = state.session_service.advance(id)?;
    Ok(Json(view).into_response())
}

#[axum::debug_handler]
pub async fn restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Response> {
    let view = state.session_service.restart(id)?;
    Ok(Json(view).into_response())
}

#[axum::debug_handler]
pub async fn exit_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> crate::error::Result<Response> {
    state.session_service.exit(id)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
