//! Low-level HTTP client — `KgHttp`.
//!
//! One method per API endpoint. Every call is a single request: no retries,
//! no caching. Non-2xx responses are mapped to `ApiError::Status` with the
//! server's `detail` attached when the body carries one.

use crate::domain::cypher::{CypherQueryRequest, CypherQueryResponse};
use crate::domain::filter::DropdownFilterResponse;
use crate::domain::infobox::InfoboxResponse;
use crate::domain::search::{SearchApiResponse, SearchRequest};
use crate::domain::semantic::{SemanticSearchRequest, SemanticSearchResponse};
use crate::domain::suggestion::SuggestionResponse;
use crate::error::{ApiError, ApiResult};
use crate::http::endpoint::Endpoint;
use crate::shared::validate_identifier;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Low-level HTTP client for the knowledge-graph explorer REST API.
#[derive(Debug, Clone)]
pub struct KgHttp {
    base_url: String,
    client: Client,
}

impl KgHttp {
    /// Client with default transport settings.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Self::with_client(base_url, client)
    }

    /// Client reusing a preconfigured `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> ApiResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ApiError::Config("base URL must not be empty".to_string()));
        }
        let url = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "Invalid base URL '{}': scheme must be http or https",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── URLs ─────────────────────────────────────────────────────────────

    pub(crate) fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    pub(crate) fn infobox_url(&self, element_id: &str) -> ApiResult<String> {
        let id = validate_identifier(element_id)?;
        Ok(format!(
            "{}/{}",
            self.url(Endpoint::Infobox),
            urlencoding::encode(id)
        ))
    }

    pub(crate) fn suggestions_url(&self, query: &str) -> String {
        format!(
            "{}?q={}",
            self.url(Endpoint::Suggestions),
            urlencoding::encode(query)
        )
    }

    // ── Infobox ──────────────────────────────────────────────────────────

    pub async fn get_infobox(&self, element_id: &str) -> ApiResult<InfoboxResponse> {
        let url = self.infobox_url(element_id)?;
        self.get(&url, Endpoint::Infobox).await
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub async fn search(&self, request: &SearchRequest) -> ApiResult<SearchApiResponse> {
        let url = self.url(Endpoint::Search);
        self.post(&url, request, Endpoint::Search).await
    }

    pub async fn get_filters(&self) -> ApiResult<DropdownFilterResponse> {
        let url = self.url(Endpoint::Filters);
        self.get(&url, Endpoint::Filters).await
    }

    pub async fn get_suggestions(&self, query: &str) -> ApiResult<SuggestionResponse> {
        let url = self.suggestions_url(query);
        self.get(&url, Endpoint::Suggestions).await
    }

    // ── Semantic search ──────────────────────────────────────────────────

    pub async fn semantic_search(
        &self,
        request: &SemanticSearchRequest,
    ) -> ApiResult<SemanticSearchResponse> {
        let url = self.url(Endpoint::SemanticSearch);
        self.post(&url, request, Endpoint::SemanticSearch).await
    }

    // ── Cypher ───────────────────────────────────────────────────────────

    pub async fn execute_cypher(
        &self,
        request: &CypherQueryRequest,
    ) -> ApiResult<CypherQueryResponse> {
        let url = self.url(Endpoint::Cypher);
        self.post(&url, request, Endpoint::Cypher).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, endpoint: Endpoint) -> ApiResult<T> {
        let req = self.client.request(Method::GET, url);
        self.do_request(req, &Method::GET, url, endpoint).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        endpoint: Endpoint,
    ) -> ApiResult<T> {
        let req = self.client.request(Method::POST, url).json(body);
        self.do_request(req, &Method::POST, url, endpoint).await
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        method: &Method,
        url: &str,
        endpoint: Endpoint,
    ) -> ApiResult<T> {
        tracing::debug!(%method, %url, "Sending request");

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return Ok(serde_json::from_slice::<T>(&bytes)?);
        }

        let body_text = resp.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body_text, endpoint.failure_message());
        tracing::warn!(
            status = status.as_u16(),
            %url,
            error = %err,
            "Request failed"
        );
        Err(err)
    }
}
