//! Endpoint table: path and generic failure message per API call.

/// The API endpoints the SDK knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Infobox,
    Search,
    SemanticSearch,
    Cypher,
    Filters,
    Suggestions,
}

impl Endpoint {
    /// Fixed path segment, relative to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Infobox => "/infobox",
            Endpoint::Search => "/search",
            Endpoint::SemanticSearch => "/vector/semantic-search",
            Endpoint::Cypher => "/explore/cypher",
            Endpoint::Filters => "/search/filters",
            Endpoint::Suggestions => "/search/suggestions",
        }
    }

    /// Message used when a failed response carries no usable detail.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Infobox => "Failed to fetch infobox data",
            Endpoint::Search => "Failed to fetch search results",
            Endpoint::SemanticSearch => "Failed to fetch semantic search results",
            Endpoint::Cypher => "Failed to fetch cypher query",
            Endpoint::Filters => "Failed to fetch dropdown filter data",
            Endpoint::Suggestions => "Failed to fetch suggestions",
        }
    }
}
