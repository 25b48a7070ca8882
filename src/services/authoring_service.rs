use std::sync::Arc;

use serde_json::{json, Map, Value as JsonValue};
use url::Url;

use crate::dto::admin_dto::{
    CreateMockTestPayload, CreateNotePayload, CreatePaperPayload, CreateSyllabusPayload,
    UpdateMockTestPayload, UpdateNotePayload, UpdatePaperPayload, UpdateSyllabusPayload,
};
use crate::error::{Error, Result};
use crate::models::mock_test::MockTestSummary;
use crate::models::note::Note;
use crate::models::paper::PastPaper;
use crate::models::syllabus::SyllabusEntry;
use crate::store::{collections, ContentStore};
use crate::utils::text::normalize_subject_id;

/// Admin-side writes. Documents are stored exactly as the portal reads
/// them, so subject ids are normalized here and never on the way out.
#[derive(Clone)]
pub struct AuthoringService {
    store: Arc<dyn ContentStore>,
}

impl AuthoringService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn create_note(&self, payload: CreateNotePayload, author: &str) -> Result<Note> {
        let fields = json!({
            "semester": payload.semester.trim(),
            "subjectId": normalize_subject_id(&payload.subject_id),
            "unitTitle": payload.unit_title.trim(),
            "content": payload.content,
            "author": author,
        });
        let doc = self.store.create(collections::NOTES, fields).await?;
        tracing::info!("Note {} created by {}", doc.id, author);
        Note::from_document(&doc)
            .ok_or_else(|| Error::Internal("Stored note came back malformed".to_string()))
    }

    pub async fn update_note(&self, id: &str, payload: UpdateNotePayload) -> Result<Note> {
        let mut fields = Map::new();
        if let Some(semester) = payload.semester {
            fields.insert("semester".to_string(), json!(semester));
        }
        if let Some(subject_id) = payload.subject_id {
            fields.insert("subjectId".to_string(), json!(normalize_subject_id(&subject_id)));
        }
        if let Some(unit_title) = payload.unit_title {
            fields.insert("unitTitle".to_string(), json!(unit_title));
        }
        if let Some(content) = payload.content {
            fields.insert("content".to_string(), json!(content));
        }
        let doc = self.apply_update(collections::NOTES, id, fields).await?;
        Note::from_document(&doc)
            .ok_or_else(|| Error::Internal("Stored note came back malformed".to_string()))
    }

    pub async fn delete_note(&self, id: &str) -> Result<()> {
        self.store.delete(collections::NOTES, id).await
    }

    pub async fn create_syllabus(
        &self,
        payload: CreateSyllabusPayload,
        author: &str,
    ) -> Result<SyllabusEntry> {
        let fields = json!({
            "semester": payload.semester.trim(),
            "subjectId": normalize_subject_id(&payload.subject_id),
            "content": payload.content,
            "author": author,
        });
        let doc = self.store.create(collections::SYLLABUS, fields).await?;
        tracing::info!("Syllabus {} created by {}", doc.id, author);
        SyllabusEntry::from_document(&doc)
            .ok_or_else(|| Error::Internal("Stored syllabus came back malformed".to_string()))
    }

    pub async fn update_syllabus(
        &self,
        id: &str,
        payload: UpdateSyllabusPayload,
    ) -> Result<SyllabusEntry> {
        let mut fields = Map::new();
        if let Some(semester) = payload.semester {
            fields.insert("semester".to_string(), json!(semester));
        }
        if let Some(subject_id) = payload.subject_id {
            fields.insert("subjectId".to_string(), json!(normalize_subject_id(&subject_id)));
        }
        if let Some(content) = payload.content {
            fields.insert("content".to_string(), json!(content));
        }
        let doc = self.apply_update(collections::SYLLABUS, id, fields).await?;
        SyllabusEntry::from_document(&doc)
            .ok_or_else(|| Error::Internal("Stored syllabus came back malformed".to_string()))
    }

    pub async fn delete_syllabus(&self, id: &str) -> Result<()> {
        self.store.delete(collections::SYLLABUS, id).await
    }

    pub async fn create_paper(
        &self,
        payload: CreatePaperPayload,
        author: &str,
    ) -> Result<PastPaper> {
        let content = payload.content.unwrap_or_default();
        let file_url = payload.file_url.map(|url| url.trim().to_string());
        let has_file = file_url.as_deref().is_some_and(|url| !url.is_empty());
        if content.trim().is_empty() && !has_file {
            return Err(Error::BadRequest(
                "A paper needs either inline content or a file link".to_string(),
            ));
        }
        if let Some(url) = file_url.as_deref().filter(|url| !url.is_empty()) {
            validate_file_url(url)?;
        }

        let fields = json!({
            "semester": payload.semester.trim(),
            "subjectId": normalize_subject_id(&payload.subject_id),
            "year": payload.year.trim(),
            "content": content,
            "fileUrl": file_url.unwrap_or_default(),
            "author": author,
        });
        let doc = self.store.create(collections::PYQ, fields).await?;
        tracing::info!("Question paper {} created by {}", doc.id, author);
        PastPaper::from_document(&doc)
            .ok_or_else(|| Error::Internal("Stored paper came back malformed".to_string()))
    }

    pub async fn update_paper(&self, id: &str, payload: UpdatePaperPayload) -> Result<PastPaper> {
        let mut fields = Map::new();
        if let Some(semester) = payload.semester {
            fields.insert("semester".to_string(), json!(semester));
        }
        if let Some(subject_id) = payload.subject_id {
            fields.insert("subjectId".to_string(), json!(normalize_subject_id(&subject_id)));
        }
        if let Some(year) = payload.year {
            fields.insert("year".to_string(), json!(year));
        }
        if let Some(content) = payload.content {
            fields.insert("content".to_string(), json!(content));
        }
        if let Some(file_url) = payload.file_url {
            validate_file_url(&file_url)?;
            fields.insert("fileUrl".to_string(), json!(file_url));
        }
        let doc = self.apply_update(collections::PYQ, id, fields).await?;
        PastPaper::from_document(&doc)
            .ok_or_else(|| Error::Internal("Stored paper came back malformed".to_string()))
    }

    pub async fn delete_paper(&self, id: &str) -> Result<()> {
        self.store.delete(collections::PYQ, id).await
    }

    pub async fn create_mock_test(
        &self,
        payload: CreateMockTestPayload,
        author: &str,
    ) -> Result<MockTestSummary> {
        ensure_content_is_json(&payload.content)?;

        let fields = json!({
            "title": payload.title.trim(),
            "content": payload.content,
            "duration": payload.duration.unwrap_or_default(),
            "difficulty": payload.difficulty.unwrap_or_default(),
            "semester": payload.semester.unwrap_or_default(),
            "subjectId": payload
                .subject_id
                .map(|id| normalize_subject_id(&id))
                .unwrap_or_default(),
            "author": author,
        });
        let doc = self.store.create(collections::MOCK_TESTS, fields).await?;
        tracing::info!("Mock test {} created by {}", doc.id, author);
        Ok(MockTestSummary::from_document(&doc))
    }

    pub async fn update_mock_test(
        &self,
        id: &str,
        payload: UpdateMockTestPayload,
    ) -> Result<MockTestSummary> {
        let mut fields = Map::new();
        if let Some(title) = payload.title {
            fields.insert("title".to_string(), json!(title));
        }
        if let Some(content) = payload.content {
            ensure_content_is_json(&content)?;
            fields.insert("content".to_string(), json!(content));
        }
        if let Some(duration) = payload.duration {
            fields.insert("duration".to_string(), json!(duration));
        }
        if let Some(difficulty) = payload.difficulty {
            fields.insert("difficulty".to_string(), json!(difficulty));
        }
        if let Some(semester) = payload.semester {
            fields.insert("semester".to_string(), json!(semester));
        }
        if let Some(subject_id) = payload.subject_id {
            fields.insert("subjectId".to_string(), json!(normalize_subject_id(&subject_id)));
        }
        let doc = self.apply_update(collections::MOCK_TESTS, id, fields).await?;
        Ok(MockTestSummary::from_document(&doc))
    }

    pub async fn delete_mock_test(&self, id: &str) -> Result<()> {
        self.store.delete(collections::MOCK_TESTS, id).await
    }

    async fn apply_update(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, JsonValue>,
    ) -> Result<crate::store::Document> {
        if fields.is_empty() {
            return Err(Error::BadRequest("No fields to update".to_string()));
        }
        self.store
            .update(collection, id, JsonValue::Object(fields))
            .await
    }
}

fn validate_file_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|_| Error::BadRequest("File link is not a valid URL".to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::BadRequest(
            "File link must use http or https".to_string(),
        ));
    }
    Ok(())
}

/// Authoring only checks that the content parses as JSON. The full
/// question checks run when a quiz session actually loads the test, so a
/// half-written draft can still be saved.
fn ensure_content_is_json(content: &str) -> Result<()> {
    serde_json::from_str::<JsonValue>(content)
        .map(|_| ())
        .map_err(|e| Error::BadRequest(format!("Test content must be valid JSON: {}", e)))
}
