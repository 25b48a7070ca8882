use std::sync::Arc;

use crate::error::Result;
use crate::models::syllabus::SyllabusEntry;
use crate::store::{collections, ContentStore, ListQuery};

#[derive(Clone)]
pub struct SyllabusService {
    store: Arc<dyn ContentStore>,
}

impl SyllabusService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// At most one syllabus is shown per subject. If several documents
    /// match, the first one wins and the rest are ignored.
    pub async fn find_for_subject(
        &self,
        semester: &str,
        subject_id: &str,
    ) -> Result<Option<SyllabusEntry>> {
        let query = ListQuery::filtered(vec![
            ("semester".to_string(), semester.to_string()),
            ("subjectId".to_string(), subject_id.to_string()),
        ]);
        let docs = self.store.list(collections::SYLLABUS, &query).await?;
        Ok(docs.iter().filter_map(SyllabusEntry::from_document).next())
    }
}
