use serde::Serialize;

use crate::models::paper::PastPaper;

/// Listing row for the papers tab. The body itself is only served by the
/// single-paper endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperSummary {
    pub id: String,
    pub year: String,
    pub has_file: bool,
    pub has_solutions: bool,
}

impl From<&PastPaper> for PaperSummary {
    fn from(paper: &PastPaper) -> Self {
        Self {
            id: paper.id.clone(),
            year: paper.year.clone(),
            has_file: paper.has_file(),
            has_solutions: paper.has_solutions(),
        }
    }
}
