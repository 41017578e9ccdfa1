//! High-level client — `KgClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, environment configuration, and accessor methods.

use crate::domain::cypher::client::Cypher;
use crate::domain::filter::client::Filters;
use crate::domain::infobox::client::Infobox;
use crate::domain::search::client::Search;
use crate::domain::semantic::client::Semantic;
use crate::domain::suggestion::client::Suggestions;
use crate::domain::suggestion::mock::MockSuggestions;
use crate::error::{ApiError, ApiResult};
use crate::http::KgHttp;
use crate::network::{API_BASE_ENV, DEFAULT_API_URL, LEGACY_API_BASE_ENV};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::cypher::client::Cypher as CypherClient;
pub use crate::domain::filter::client::Filters as FiltersClient;
pub use crate::domain::infobox::client::Infobox as InfoboxClient;
pub use crate::domain::search::client::Search as SearchClient;
pub use crate::domain::semantic::client::Semantic as SemanticClient;
pub use crate::domain::suggestion::client::Suggestions as SuggestionsClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.search()`, `client.infobox()`, etc. Cloning is cheap and shares
/// the connection pool.
#[derive(Debug, Clone)]
pub struct KgClient {
    pub(crate) http: KgHttp,
    /// Offline suggestion source, when enabled on the builder.
    pub(crate) mock_suggestions: Option<MockSuggestions>,
}

impl KgClient {
    pub fn builder() -> KgClientBuilder {
        KgClientBuilder::default()
    }

    /// Build a client from `KG_API_BASE_URL`, falling back to
    /// `NUXT_PUBLIC_API_BASE_URL` (a `.env` file is honoured).
    pub fn from_env() -> ApiResult<Self> {
        KgClientBuilder::from_env().build()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The low-level client, for callers that want wire-level access.
    pub fn http(&self) -> &KgHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn semantic(&self) -> Semantic<'_> {
        Semantic { client: self }
    }

    pub fn cypher(&self) -> Cypher<'_> {
        Cypher { client: self }
    }

    pub fn infobox(&self) -> Infobox<'_> {
        Infobox { client: self }
    }

    pub fn filters(&self) -> Filters<'_> {
        Filters { client: self }
    }

    pub fn suggestions(&self) -> Suggestions<'_> {
        Suggestions { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct KgClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
    mock_suggestions: Option<MockSuggestions>,
}

impl Default for KgClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            default_headers: Vec::new(),
            mock_suggestions: None,
        }
    }
}

impl KgClientBuilder {
    /// Builder seeded with the base URL from the environment.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Failed to load .env file");
            }
        }
        let base_url = resolve_base_url([
            std::env::var(API_BASE_ENV).ok(),
            std::env::var(LEGACY_API_BASE_ENV).ok(),
        ]);
        tracing::debug!(%base_url, "Resolved API base URL");
        Self::default().base_url(&base_url)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Client-wide request timeout. Unset by default: the transport decides.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Serve suggestions from the built-in offline list instead of the backend.
    pub fn mock_suggestions(mut self, enabled: bool) -> Self {
        self.mock_suggestions = enabled.then(MockSuggestions::default);
        self
    }

    /// Serve suggestions from a custom offline source.
    pub fn mock_suggestion_source(mut self, source: MockSuggestions) -> Self {
        self.mock_suggestions = Some(source);
        self
    }

    pub fn build(self) -> ApiResult<KgClient> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::Config(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::Config(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
        }

        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(KgClient {
            http: KgHttp::with_client(&self.base_url, client)?,
            mock_suggestions: self.mock_suggestions,
        })
    }
}

/// First non-blank env value (trimmed), or the default.
fn resolve_base_url<I>(values: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    values
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
