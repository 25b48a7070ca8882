use std::sync::Arc;

use crate::error::Result;
use crate::models::note::Note;
use crate::store::{collections, ContentStore, ListQuery};

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn ContentStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Notes for one subject, ordered by unit title so "Unit 1" comes
    /// before "Unit 2" regardless of upload order.
    pub async fn list_for_subject(&self, semester: &str, subject_id: &str) -> Result<Vec<Note>> {
        let query = ListQuery::filtered(vec![
            ("semester".to_string(), semester.to_string()),
            ("subjectId".to_string(), subject_id.to_string()),
        ]);
        let docs = self.store.list(collections::NOTES, &query).await?;

        let mut notes: Vec<Note> = docs.iter().filter_map(Note::from_document).collect();
        notes.sort_by(|a, b| a.unit_title.cmp(&b.unit_title));
        Ok(notes)
    }
}
