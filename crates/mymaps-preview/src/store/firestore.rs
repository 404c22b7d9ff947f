//! Firestore REST client.
//!
//! Two call shapes, both unauthenticated reads against the public rules of the
//! project:
//!
//! ```text
//! GET  {documents}/{collection}/{id}
//! POST {documents}:runQuery   {"structuredQuery": {...}}
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use super::{Document, DocumentStore, StructuredQuery};
use crate::config::Config;
use crate::error::StoreError;

/// One element of a `runQuery` response stream. An empty result set comes
/// back as a single element carrying only `readTime`.
#[derive(Debug, Deserialize)]
struct RunQueryResponse {
    #[serde(default)]
    document: Option<Document>,
}

/// Firestore-backed [`DocumentStore`].
#[derive(Clone, Debug)]
pub struct FirestoreClient {
    client: Client,
    documents_url: Url,
}

impl FirestoreClient {
    /// Build a client for the project named in `config`.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let documents_url = Url::parse(&config.documents_url())
            .map_err(|e| StoreError::InvalidRequest(format!("documents url: {e}")))?;

        if documents_url.cannot_be_a_base() {
            return Err(StoreError::InvalidRequest(format!(
                "documents url {documents_url} cannot carry a path"
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("mymaps-preview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            documents_url,
        })
    }

    /// `{documents}/{collection}/{id}`, with `id` as one escaped segment.
    fn document_url(&self, collection: &str, id: &str) -> Result<Url, StoreError> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::InvalidRequest("documents url has no path".to_string()))?
            .pop_if_empty()
            .push(collection)
            .push(id);
        Ok(url)
    }

    fn run_query_url(&self) -> Result<Url, StoreError> {
        let raw = format!(
            "{}:runQuery",
            self.documents_url.as_str().trim_end_matches('/')
        );
        Url::parse(&raw).map_err(|e| StoreError::InvalidRequest(format!("runQuery url: {e}")))
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let url = self.document_url(collection, id)?;
        tracing::debug!(collection = %collection, id = %id, "fetching document");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::Status(status));
        }

        let body = response.bytes().await?;
        let document = serde_json::from_slice::<Document>(&body)?;
        Ok(Some(document))
    }

    async fn run_query(&self, query: &StructuredQuery) -> Result<Vec<Document>, StoreError> {
        let url = self.run_query_url()?;
        tracing::debug!(collection = %query.collection_id(), "running structured query");

        let response = self
            .client
            .post(url)
            .json(&query.to_request_body())
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StoreError::Status(status));
        }

        let body = response.bytes().await?;
        let results = serde_json::from_slice::<Vec<RunQueryResponse>>(&body)?;

        Ok(results.into_iter().filter_map(|r| r.document).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(base: &str) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            firestore_project: "demo".to_string(),
            firestore_base_url: base.to_string(),
            site_url: "https://maps.example".to_string(),
            site_name: "MyMaps".to_string(),
            default_image: "https://maps.example/og-image.png".to_string(),
            upstream_url: "http://127.0.0.1:3000".to_string(),
        }
    }

    #[test]
    fn document_url_escapes_id_segment() {
        let client = FirestoreClient::new(&test_config("https://fs.example/v1")).unwrap();
        let url = client.document_url("posts", "a/../b c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://fs.example/v1/projects/demo/databases/(default)/documents/posts/a%2F..%2Fb%20c"
        );
    }

    #[test]
    fn run_query_url_appends_method_suffix() {
        let client = FirestoreClient::new(&test_config("https://fs.example/v1")).unwrap();
        assert_eq!(
            client.run_query_url().unwrap().as_str(),
            "https://fs.example/v1/projects/demo/databases/(default)/documents:runQuery"
        );
    }

    #[test]
    fn invalid_base_url_is_internal_error() {
        let err = FirestoreClient::new(&test_config("not a url")).unwrap_err();
        assert!(!err.is_remote());
    }

    #[test]
    fn empty_result_marker_is_skipped() {
        let body = r#"[{"readTime": "2024-06-10T00:00:00Z"}]"#;
        let results: Vec<RunQueryResponse> = serde_json::from_str(body).unwrap();
        assert!(results.into_iter().all(|r| r.document.is_none()));
    }
}
