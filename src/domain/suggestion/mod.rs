//! Suggestion domain — autocomplete candidates while typing a query.

#[cfg(feature = "http")]
pub mod client;
pub mod mock;

use crate::shared::{ElementId, EntityKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub element_id: ElementId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /search/suggestions?q=`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<SuggestionItem>,
    /// Fields the backend sent beyond the typed ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SuggestionResponse {
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
