//! Search service configuration.
//!
//! The connection parameters are served to the front-end as a small JSON
//! payload produced at deploy time from a template. The payload follows the
//! shape of a Typesense client configuration:
//!
//! ```json
//! {
//!   "nodes": [{ "host": "search.example.org", "port": "443", "protocol": "https", "path": "" }],
//!   "apiKey": "search-only-key",
//!   "connectionTimeoutSeconds": 2
//! }
//! ```
//!
//! The payload is parsed as data; nothing fetched is ever executed.
//!
//! This module also holds the compile-time constants of the query contract.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{error, info};

// =============================================================================
// Query Contract Constants
// =============================================================================

/// Quiet period after the last keystroke before a search fires.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Results per page when the selector holds no usable value.
pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;

/// Choices offered by the results-per-page selector.
pub const RESULTS_PER_PAGE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Collection searched when the payload does not name one.
pub const DEFAULT_COLLECTION: &str = "documents";

/// Document field that is searched and highlighted.
pub const SEARCH_FIELD: &str = "ocr_text_original";

/// Relevance ordering, best match first.
pub const SORT_BY_RELEVANCE: &str = "_text_match:desc";

/// Characters of raw text shown when the service returned no highlight.
pub const FALLBACK_SNIPPET_CHARS: usize = 200;

/// Connection timeout used when the payload omits one.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 2;

/// Sources present in the corpus, as `(source value, display label)`.
pub const KNOWN_SOURCES: [(&str, &str); 4] = [
    ("anno.onb.ac.at", "ANNO"),
    ("iiif.onb.ac.at", "ABO"),
    ("digipress.digitale-sammlungen.de", "DigiPress"),
    ("api.digitale-sammlungen.de", "MDZ"),
];

// =============================================================================
// SearchConfig
// =============================================================================

/// Transport protocol of the search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// Parses a protocol name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(ConfigError::Invalid(format!(
                "unsupported protocol '{}' (expected http or https)",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection parameters for the search service.
///
/// Loaded once at startup and immutable for the rest of the session.
#[derive(Clone, PartialEq)]
pub struct SearchConfig {
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
    /// URL path prefix, normalised to `""` or `/prefix` (no trailing slash)
    pub path: String,
    pub api_key: String,
    pub timeout_seconds: u64,
    pub collection: String,
}

// The API key stays out of logs.
impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("protocol", &self.protocol)
            .field("path", &self.path)
            .field("api_key", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("collection", &self.collection)
            .finish()
    }
}

impl SearchConfig {
    /// Parses and validates a JSON configuration payload.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let payload: ClientConfigPayload =
            serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        payload.validate()
    }

    /// Base URL of the service, e.g. `https://search.example.org:443/typesense`.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol, self.host, self.port, self.path
        )
    }

    /// Connection timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Normalises a path prefix to `""` or `/segment/...` without a trailing slash.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

// =============================================================================
// Payload
// =============================================================================

#[derive(Debug, Deserialize)]
struct ClientConfigPayload {
    #[serde(default)]
    nodes: Vec<NodePayload>,
    #[serde(rename = "apiKey", alias = "api_key", default)]
    api_key: String,
    #[serde(
        rename = "connectionTimeoutSeconds",
        alias = "connection_timeout_seconds",
        default
    )]
    connection_timeout_seconds: Option<u64>,
    #[serde(default)]
    collection: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NodePayload {
    #[serde(default)]
    host: String,
    port: PortValue,
    #[serde(default = "default_protocol")]
    protocol: String,
    #[serde(default)]
    path: String,
}

/// Templated payloads carry the port as a string; hand-written ones as a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u64),
    Text(String),
}

fn default_protocol() -> String {
    "http".to_string()
}

impl PortValue {
    fn resolve(&self) -> Result<u16, ConfigError> {
        let raw = match self {
            PortValue::Number(n) => *n,
            PortValue::Text(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid(format!("port '{}' is not a number", s)))?,
        };
        match u16::try_from(raw) {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::Invalid(format!(
                "port {} is outside 1-65535",
                raw
            ))),
        }
    }
}

impl ClientConfigPayload {
    fn validate(self) -> Result<SearchConfig, ConfigError> {
        let node = self
            .nodes
            .into_iter()
            .next()
            .ok_or_else(|| ConfigError::Invalid("no search nodes configured".into()))?;

        let host = node.host.trim().to_string();
        if host.is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".into()));
        }

        let api_key = self.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ConfigError::Invalid("apiKey must not be empty".into()));
        }

        let timeout_seconds = self
            .connection_timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        if timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "connectionTimeoutSeconds must be positive".into(),
            ));
        }

        let collection = self
            .collection
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

        Ok(SearchConfig {
            host,
            port: node.port.resolve()?,
            protocol: Protocol::parse(&node.protocol)?,
            path: normalize_path(&node.path),
            api_key,
            timeout_seconds,
            collection,
        })
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Fetches and parses the configuration payload.
///
/// Failures are logged and propagated; there is no retry.
pub async fn load_config(http: &reqwest::Client, url: &str) -> Result<SearchConfig, ConfigError> {
    let result = fetch_config(http, url).await;
    match &result {
        Ok(config) => info!(
            "Loaded search configuration: {} (collection '{}')",
            config.base_url(),
            config.collection
        ),
        Err(e) => error!("Failed to load search client config from {}: {}", url, e),
    }
    result
}

async fn fetch_config(http: &reqwest::Client, url: &str) -> Result<SearchConfig, ConfigError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConfigError::Fetch(format!("{} returned {}", url, status)));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ConfigError::Fetch(format!("Failed to read body: {}", e)))?;

    SearchConfig::from_json(&text)
}
