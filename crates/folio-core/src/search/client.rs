//! HTTP client for the search service.
//!
//! reqwest works on both native and WASM targets:
//! - Native: hyper with rustls, with the configured timeout enforced
//! - WASM: the browser's fetch() API (timeouts are left to the browser)

use super::request::SearchRequest;
use super::types::SearchResponse;
use crate::config::SearchConfig;
use crate::error::{ConfigError, SearchError};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Header carrying the search-only API key.
const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

/// Anything that can answer a [`SearchRequest`].
///
/// The controller is generic over this trait so it can be driven by the real
/// service or by a scripted backend in tests.
#[async_trait(?Send)]
pub trait SearchBackend {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

/// Lets a controller borrow a backend the caller keeps using.
#[async_trait(?Send)]
impl<B: SearchBackend + ?Sized> SearchBackend for &B {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        (**self).search(request).await
    }
}

/// Client handle bound to one collection of a Typesense node.
#[derive(Debug, Clone)]
pub struct TypesenseClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl TypesenseClient {
    /// Builds a client for the collection named in `config`.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());

        let http = builder
            .build()
            .map_err(|e| ConfigError::Invalid(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: search_endpoint(config)?,
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL of the document search endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// `{base_url}/collections/{collection}/documents/search`
fn search_endpoint(config: &SearchConfig) -> Result<Url, ConfigError> {
    let mut url = Url::parse(&config.base_url())
        .map_err(|e| ConfigError::Invalid(format!("{}: {}", config.base_url(), e)))?;

    url.path_segments_mut()
        .map_err(|_| ConfigError::Invalid(format!("{} cannot be a base URL", config.base_url())))?
        .pop_if_empty()
        .extend(["collections", config.collection.as_str(), "documents", "search"]);

    Ok(url)
}

#[async_trait(?Send)]
impl SearchBackend for TypesenseClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let params = request.to_query_pairs();
        debug!("GET {} {:?}", self.endpoint, params);

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response
            .json::<SearchResponse>()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))
    }
}

/// Extracts `{"message": "..."}` from an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}
