use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[axum::debug_handler]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> crate::error::Result<Response> {
    let hits = state.search_service.search(&params.q).await?;
    let total = hits.len();
    Ok(Json(json!({
        "query": params.q,
        "results": hits,
        "total": total,
    }))
    .into_response())
}
