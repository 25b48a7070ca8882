use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Document;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub subject_id: String,
    #[serde(default)]
    pub unit_title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Stored documents are hand-authored, so missing fields fall back to
    /// empty values and a document that is not even an object is skipped.
    pub fn from_document(doc: &Document) -> Option<Self> {
        let mut note: Note = serde_json::from_value(doc.fields.clone()).ok()?;
        note.id = doc.id.clone();
        note.created_at = doc.created_at;
        Some(note)
    }
}
