use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::session::ResultSummary;

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_FINISHED: &str = "finished";

/// Snapshot of a quiz session returned by every session endpoint. Exactly
/// one of `question` and `result` is present, depending on `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub test_id: String,
    pub title: String,
    pub status: String,
    pub progress: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultView {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
}

impl From<ResultSummary> for ResultView {
    fn from(summary: ResultSummary) -> Self {
        Self {
            score: summary.score,
            total: summary.total,
            percentage: summary.percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOptionRequest {
    pub option: usize,
}
