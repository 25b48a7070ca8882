use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::paper::PastPaper;
use crate::store::{collections, ContentStore, ListQuery};

#[derive(Clone)]
pub struct PaperService {
    store: Arc<dyn ContentStore>,
}

impl PaperService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Papers for one subject, newest exam year first. Years are compared
    /// as strings, which orders four-digit years correctly.
    pub async fn list_for_subject(
        &self,
        semester: &str,
        subject_id: &str,
    ) -> Result<Vec<PastPaper>> {
        let query = ListQuery::filtered(vec![
            ("semester".to_string(), semester.to_string()),
            ("subjectId".to_string(), subject_id.to_string()),
        ]);
        let docs = self.store.list(collections::PYQ, &query).await?;

        let mut papers: Vec<PastPaper> = docs.iter().filter_map(PastPaper::from_document).collect();
        papers.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(papers)
    }

    pub async fn get(&self, id: &str) -> Result<PastPaper> {
        let doc = self
            .store
            .get(collections::PYQ, id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Question paper '{}' does not exist", id)))?;
        PastPaper::from_document(&doc)
            .ok_or_else(|| Error::Internal(format!("Question paper '{}' is malformed", id)))
    }
}
