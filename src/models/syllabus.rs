use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Document;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub subject_id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl SyllabusEntry {
    pub fn from_document(doc: &Document) -> Option<Self> {
        let mut entry: SyllabusEntry = serde_json::from_value(doc.fields.clone()).ok()?;
        entry.id = doc.id.clone();
        entry.created_at = doc.created_at;
        Some(entry)
    }
}
