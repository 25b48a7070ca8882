use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use crate::config::Config;
use crate::error::{Error, Result};

use super::{ContentStore, Document, ListQuery};

const API_KEY_HEADER: &str = "x-api-key";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct DocumentPage {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Clone)]
pub struct HostedStore {
    client: Client,
    base_url: String,
    project_id: String,
    api_key: String,
}

impl HostedStore {
    pub fn new(base_url: &str, project_id: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.store_base_url,
            &config.store_project_id,
            &config.store_api_key,
        )
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/collections/{}/documents",
            self.base_url, self.project_id, collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }
}

#[async_trait]
impl ContentStore for HostedStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let response = self
            .client
            .get(self.document_url(collection, id))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "Fetching document '{}' from '{}' returned status {}",
                id,
                collection,
                response.status()
            )));
        }

        Ok(Some(response.json::<Document>().await?))
    }

    async fn list(&self, collection: &str, query: &ListQuery) -> Result<Vec<Document>> {
        let mut params: Vec<(String, String)> = query
            .filters
            .iter()
            .map(|(field, value)| ("filter".to_string(), format!("{}:eq:{}", field, value)))
            .collect();
        if query.newest_first {
            params.push(("order".to_string(), "createdAt:desc".to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }

        let response = self
            .client
            .get(self.collection_url(collection))
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "Listing '{}' returned status {}",
                collection,
                response.status()
            )));
        }

        let page = response.json::<DocumentPage>().await?;
        Ok(page.documents)
    }

    async fn create(&self, collection: &str, fields: JsonValue) -> Result<Document> {
        let response = self
            .client
            .post(self.collection_url(collection))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "Creating a document in '{}' returned status {}",
                collection,
                response.status()
            )));
        }

        Ok(response.json::<Document>().await?)
    }

    async fn update(&self, collection: &str, id: &str, fields: JsonValue) -> Result<Document> {
        let response = self
            .client
            .patch(self.document_url(collection, id))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!(
                "Document '{}' does not exist in '{}'",
                id, collection
            )));
        }
        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "Updating document '{}' in '{}' returned status {}",
                id,
                collection,
                response.status()
            )));
        }

        Ok(response.json::<Document>().await?)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.document_url(collection, id))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!(
                "Document '{}' does not exist in '{}'",
                id, collection
            )));
        }
        if !response.status().is_success() {
            return Err(Error::Store(format!(
                "Deleting document '{}' from '{}' returned status {}",
                id,
                collection,
                response.status()
            )));
        }

        Ok(())
    }
}
