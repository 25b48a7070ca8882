use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::models::catalog;

#[axum::debug_handler]
pub async fn list_semesters() -> crate::error::Result<Response> {
    Ok(Json(json!({
        "semesters": catalog::SEMESTERS,
        "total": catalog::SEMESTERS.len(),
    }))
    .into_response())
}

#[axum::debug_handler]
pub async fn get_semester(Path(id): Path<String>) -> crate::error::Result<Response> {
    match catalog::find_semester(&id) {
        Some(semester) => Ok(Json(semester).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "semester_not_found",
                "message": "No such semester in the course mapping"
            })),
        )
            .into_response()),
    }
}
