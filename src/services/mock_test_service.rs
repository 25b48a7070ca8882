use std::sync::Arc;

use crate::error::Result;
use crate::models::mock_test::MockTestSummary;
use crate::store::{collections, ContentStore, ListQuery};

#[derive(Clone)]
pub struct MockTestService {
    store: Arc<dyn ContentStore>,
}

impl MockTestService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Every stored test as a listing card, sorted by title. Broken tests
    /// still get a card, they just fail later when a session starts.
    pub async fn list(&self) -> Result<Vec<MockTestSummary>> {
        let docs = self
            .store
            .list(collections::MOCK_TESTS, &ListQuery::default())
            .await?;

        let mut tests: Vec<MockTestSummary> =
            docs.iter().map(MockTestSummary::from_document).collect();
        tests.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(tests)
    }
}
