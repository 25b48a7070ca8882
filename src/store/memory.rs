use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::{Error, Result};

use super::{ContentStore, Document, ListQuery};

/// In-memory [`ContentStore`] used by tests. Counts operations so tests can
/// assert how often the portal actually hits the store.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    reads: AtomicUsize,
    lists: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn list_count(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Document>>> {
        self.collections.lock().expect("Memory store mutex poisoned")
    }

    fn missing(collection: &str, id: &str) -> Error {
        Error::NotFound(format!(
            "Document '{}' does not exist in '{}'",
            id, collection
        ))
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let guard = self.lock();
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned()))
    }

    async fn list(&self, collection: &str, query: &ListQuery) -> Result<Vec<Document>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        let guard = self.lock();
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };

        let mut selected: Vec<Document> = docs
            .iter()
            .filter(|doc| {
                query.filters.iter().all(|(field, value)| {
                    doc.fields.get(field).and_then(JsonValue::as_str) == Some(value.as_str())
                })
            })
            .cloned()
            .collect();

        if query.newest_first {
            // Documents are appended in creation order.
            selected.reverse();
        }
        if let Some(limit) = query.limit {
            selected.truncate(limit);
        }

        Ok(selected)
    }

    async fn create(&self, collection: &str, fields: JsonValue) -> Result<Document> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let doc = Document {
            id: Uuid::new_v4().to_string(),
            fields,
            created_at: Utc::now(),
        };
        self.lock()
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, collection: &str, id: &str, fields: JsonValue) -> Result<Document> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.lock();
        let docs = guard
            .get_mut(collection)
            .ok_or_else(|| Self::missing(collection, id))?;
        let doc = docs
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| Self::missing(collection, id))?;

        match (doc.fields.as_object_mut(), fields.as_object()) {
            (Some(existing), Some(updates)) => {
                for (key, value) in updates {
                    existing.insert(key.clone(), value.clone());
                }
            }
            _ => doc.fields = fields,
        }

        Ok(doc.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut guard = self.lock();
        let docs = guard
            .get_mut(collection)
            .ok_or_else(|| Self::missing(collection, id))?;
        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        if docs.len() == before {
            return Err(Self::missing(collection, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn filters_match_on_string_fields() {
        let store = MemoryStore::new();
        store
            .create("notes", json!({ "semester": "1", "subjectId": "c1" }))
            .await
            .expect("create failed");
        store
            .create("notes", json!({ "semester": "2", "subjectId": "c3" }))
            .await
            .expect("create failed");

        let query = ListQuery::filtered(vec![("semester".to_string(), "2".to_string())]);
        let docs = store.list("notes", &query).await.expect("list failed");
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].fields["subjectId"], "c3");
    }

    #[tokio::test]
    async fn recent_listing_returns_newest_first_and_honours_limit() {
        let store = MemoryStore::new();
        for n in 1..=5 {
            store
                .create("pyq", json!({ "year": format!("20{:02}", n) }))
                .await
                .expect("create failed");
        }

        let docs = store
            .list("pyq", &ListQuery::recent(3))
            .await
            .expect("list failed");
        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].fields["year"], "2005");
        assert_eq!(docs[2].fields["year"], "2003");
    }

    #[tokio::test]
    async fn update_merges_fields_and_keeps_the_rest() {
        let store = MemoryStore::new();
        let doc = store
            .create("notes", json!({ "unitTitle": "Unit 1", "content": "old" }))
            .await
            .expect("create failed");

        let updated = store
            .update("notes", &doc.id, json!({ "content": "new" }))
            .await
            .expect("update failed");
        assert_eq!(updated.fields["unitTitle"], "Unit 1");
        assert_eq!(updated.fields["content"], "new");
    }

    #[tokio::test]
    async fn delete_then_get_returns_none() {
        let store = MemoryStore::new();
        let doc = store
            .create("notes", json!({ "unitTitle": "Unit 1" }))
            .await
            .expect("create failed");

        store.delete("notes", &doc.id).await.expect("delete failed");
        let found = store.get("notes", &doc.id).await.expect("get failed");
        assert!(found.is_none());
        assert!(matches!(
            store.delete("notes", &doc.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
