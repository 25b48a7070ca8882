use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::models::mock_test::DEFAULT_TITLE;
use crate::models::question::QuestionSet;
use crate::store::{collections, ContentStore};

/// Fetches a mock test document and turns its hand-authored `content`
/// payload into a validated [`QuestionSet`].
#[derive(Clone)]
pub struct QuestionSetLoader {
    store: Arc<dyn ContentStore>,
}

impl QuestionSetLoader {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self, test_id: &str) -> Result<QuestionSet> {
        if test_id.trim().is_empty() {
            return Err(Error::BadRequest("Test id must not be empty".to_string()));
        }

        let doc = self
            .store
            .get(collections::MOCK_TESTS, test_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Mock test '{}' does not exist", test_id)))?;

        let title = doc
            .fields
            .get("title")
            .and_then(JsonValue::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let content = doc
            .fields
            .get("content")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| {
                Error::InvalidQuestionSet(format!(
                    "Mock test '{}' has no content payload",
                    test_id
                ))
            })?;

        QuestionSet::parse(test_id, title, content)
    }
}
