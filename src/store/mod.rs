pub mod hosted;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::Result;

pub use hosted::HostedStore;
pub use memory::MemoryStore;

/// Collection names in the hosted document database.
pub mod collections {
    pub const NOTES: &str = "notes";
    pub const SYLLABUS: &str = "syllabus";
    pub const PYQ: &str = "pyq";
    pub const MOCK_TESTS: &str = "mock-tests";
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub fields: JsonValue,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filters: Vec<(String, String)>,
    pub newest_first: bool,
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn filtered(filters: Vec<(String, String)>) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    pub fn recent(limit: usize) -> Self {
        Self {
            newest_first: true,
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Seam between the portal services and the hosted document database.
/// Production uses [`HostedStore`]; tests swap in [`MemoryStore`].
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    async fn list(&self, collection: &str, query: &ListQuery) -> Result<Vec<Document>>;

    async fn create(&self, collection: &str, fields: JsonValue) -> Result<Document>;

    async fn update(&self, collection: &str, id: &str, fields: JsonValue) -> Result<Document>;

    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}
