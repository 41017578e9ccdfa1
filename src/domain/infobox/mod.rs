//! Infobox domain — one entity's properties and its neighbours.

#[cfg(feature = "http")]
pub mod client;
mod format;

pub use format::{FormattedFact, FormattedRelation};

use crate::shared::ElementId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open-ended property bag of a graph node.
pub type InfoboxProperties = Map<String, Value>;

/// A node directly related to the infobox entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedNode {
    pub element_id: ElementId,
    pub relationship: String,
    pub labels: Vec<String>,
    pub properties: InfoboxProperties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /infobox/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoboxResponse {
    pub status: String,
    pub element_id: ElementId,
    pub labels: Vec<String>,
    pub properties: InfoboxProperties,
    pub related_nodes: Vec<RelatedNode>,
    /// Fields the backend sent beyond the typed ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InfoboxResponse {
    /// The entity's `name` property, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }

    /// The entity's `image` property, if it is a string.
    pub fn image(&self) -> Option<&str> {
        self.properties.get("image").and_then(Value::as_str)
    }

    /// Display facts for the property table.
    pub fn facts(&self) -> Vec<FormattedFact> {
        format::facts(&self.properties)
    }

    /// Display rows for the related-entities list.
    pub fn relations(&self) -> Vec<FormattedRelation> {
        self.related_nodes.iter().map(FormattedRelation::from).collect()
    }
}
