use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::store::Document;

fn deserialize_year_flexible<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => Ok(s),
        StringOrInt::Int(n) => Ok(n.to_string()),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaperFields {
    #[serde(default)]
    semester: String,
    #[serde(default)]
    subject_id: String,
    #[serde(default, deserialize_with = "deserialize_year_flexible")]
    year: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    file_url: Option<String>,
}

/// How a paper's body is delivered. A non-empty `fileUrl` wins over inline
/// HTML, the two never coexist in a parsed paper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaperBody {
    File { url: String },
    Html { content: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastPaper {
    pub id: String,
    pub semester: String,
    pub subject_id: String,
    pub year: String,
    pub body: PaperBody,
    pub created_at: DateTime<Utc>,
}

impl PastPaper {
    pub fn from_document(doc: &Document) -> Option<Self> {
        let fields: PaperFields = serde_json::from_value(doc.fields.clone()).ok()?;
        let body = match fields.file_url {
            Some(url) if !url.trim().is_empty() => PaperBody::File { url },
            _ => PaperBody::Html {
                content: fields.content,
            },
        };
        Some(Self {
            id: doc.id.clone(),
            semester: fields.semester,
            subject_id: fields.subject_id,
            year: fields.year,
            body,
            created_at: doc.created_at,
        })
    }

    pub fn has_file(&self) -> bool {
        matches!(self.body, PaperBody::File { .. })
    }

    pub fn has_solutions(&self) -> bool {
        matches!(&self.body, PaperBody::Html { content } if !content.is_empty())
    }
}
