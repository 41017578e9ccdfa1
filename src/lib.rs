//! # Knowledge-Graph Explorer SDK
//!
//! A typed Rust client for the knowledge-graph explorer REST API: keyword
//! search, semantic search, Cypher execution, entity infoboxes, dropdown
//! filters and search suggestions.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Request/response types, result projections, errors (always available)
//! 2. **HTTP API** — `KgHttp`, one method per endpoint, uniform error mapping
//! 3. **High-Level Client** — `KgClient` with a builder and nested sub-clients
//!
//! Every call is a single request. There is no retry, caching or pagination
//! state; errors always reach the caller.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kg_explorer_sdk::prelude::*;
//!
//! let client = KgClient::from_env()?;
//!
//! let results = client
//!     .search()
//!     .run(&SearchRequest::new("Soekarno").search_type(SearchType::Person))
//!     .await?;
//!
//! match client.infobox().get(results.persons.data[0].element_id.as_str()).await {
//!     Ok(infobox) => println!("{:?}", infobox.facts()),
//!     Err(ApiError::Status { status, message, .. }) => eprintln!("{status}: {message}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): request/response types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with the per-endpoint table.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `KgClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ElementId, EntityKind};

    // Domain types — search
    pub use crate::domain::search::{
        EventSearchResult, PersonSearchResult, ResultPage, SearchApiResponse, SearchRequest,
        SearchType,
    };

    // Domain types — semantic search
    pub use crate::domain::semantic::{
        SemanticEventResult, SemanticPersonResult, SemanticSearchRequest, SemanticSearchResponse,
    };

    // Domain types — cypher
    pub use crate::domain::cypher::{
        CypherGraph, CypherQueryRequest, CypherQueryResponse, CypherTable,
    };

    // Domain types — infobox
    pub use crate::domain::infobox::{
        FormattedFact, FormattedRelation, InfoboxResponse, RelatedNode,
    };

    // Domain types — filters, suggestions
    pub use crate::domain::filter::{DropdownFilterResponse, FilterOption};
    pub use crate::domain::suggestion::mock::MockSuggestions;
    pub use crate::domain::suggestion::{SuggestionItem, SuggestionResponse};

    // Errors
    pub use crate::error::{ApiError, ApiResult, ErrorDetail, ValidationErrorItem};

    // Network
    pub use crate::network::{API_BASE_ENV, DEFAULT_API_URL, LEGACY_API_BASE_ENV};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CypherClient, FiltersClient, InfoboxClient, KgClient, KgClientBuilder, SearchClient,
        SemanticClient, SuggestionsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::KgHttp;
}
