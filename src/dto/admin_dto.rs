use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotePayload {
    #[validate(length(min = 1))]
    pub semester: String,
    #[validate(length(min = 1))]
    pub subject_id: String,
    #[validate(length(min = 1))]
    pub unit_title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSyllabusPayload {
    #[validate(length(min = 1))]
    pub semester: String,
    #[validate(length(min = 1))]
    pub subject_id: String,
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePaperPayload {
    #[validate(length(min = 1))]
    pub semester: String,
    #[validate(length(min = 1))]
    pub subject_id: String,
    #[validate(length(min = 1))]
    pub year: String,
    pub content: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMockTestPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub semester: Option<String>,
    pub subject_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNotePayload {
    // Using serde deserializer to trim and convert empty strings to None
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub semester: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub subject_id: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub unit_title: Option<String>,

    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSyllabusPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub semester: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub subject_id: Option<String>,

    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePaperPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub semester: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub subject_id: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub year: Option<String>,

    pub content: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMockTestPayload {
    #[serde(default, deserialize_with = "trim_optional_string")]
    pub title: Option<String>,

    pub content: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub duration: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub difficulty: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub semester: Option<String>,

    #[serde(default, deserialize_with = "trim_optional_string")]
    pub subject_id: Option<String>,
}

fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
