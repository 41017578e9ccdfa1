//! Semantic search domain — similarity-ranked results over entity embeddings.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::{ElementId, EntityKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Body of `POST /vector/semantic-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticSearchRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SemanticSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticPersonContext {
    pub positions: Vec<String>,
    pub country: String,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticPersonResult {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub element_id: ElementId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    /// Kept as sent (`1` stays an integer); see `score()`.
    pub similarity_score: Number,
    pub context: SemanticPersonContext,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticEventContext {
    pub country: String,
    pub impact: String,
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticEventResult {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub element_id: ElementId,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    /// Kept as sent (`1` stays an integer); see `score()`.
    pub similarity_score: Number,
    pub context: SemanticEventContext,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `POST /vector/semantic-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticSearchResponse {
    pub query: String,
    pub search_type: String,
    pub persons: Vec<SemanticPersonResult>,
    pub events: Vec<SemanticEventResult>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SemanticPersonResult {
    pub fn score(&self) -> f64 {
        self.similarity_score.as_f64().unwrap_or_default()
    }
}

impl SemanticEventResult {
    pub fn score(&self) -> f64 {
        self.similarity_score.as_f64().unwrap_or_default()
    }
}

impl SemanticSearchResponse {
    /// Highest similarity score across persons and events.
    pub fn best_score(&self) -> Option<f64> {
        self.persons
            .iter()
            .map(SemanticPersonResult::score)
            .chain(self.events.iter().map(SemanticEventResult::score))
            .fold(None, |best, s| match best {
                Some(b) if b >= s => Some(b),
                _ => Some(s),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_limit_optional() {
        let req = SemanticSearchRequest::new("pahlawan revolusi");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"query": "pahlawan revolusi"})
        );
        let req = req.limit(5);
        assert_eq!(serde_json::to_value(&req).unwrap()["limit"], 5);
    }

    #[test]
    fn test_response_round_trip_with_nulls() {
        let body = json!({
            "query": "proklamator",
            "search_type": "semantic",
            "persons": [{
                "type": "person",
                "element_id": "4:aa:1",
                "name": "Mohammad Hatta",
                "description": "Wakil presiden pertama",
                "image": null,
                "similarity_score": 0.87,
                "context": {
                    "positions": ["Wakil Presiden"],
                    "country": "Indonesia",
                    "birth_date": "1902-08-12",
                    "death_date": null
                }
            }],
            "events": [{
                "type": "event",
                "element_id": "4:aa:9",
                "name": "Proklamasi Kemerdekaan Indonesia",
                "description": "Pembacaan teks proklamasi",
                "image": "https://example.org/proklamasi.jpg",
                "similarity_score": 0.91,
                "context": {
                    "country": "Indonesia",
                    "impact": "Kemerdekaan",
                    "date": null
                }
            }]
        });

        let resp: SemanticSearchResponse = serde_json::from_value(body.clone()).unwrap();
        assert!(resp.persons[0].image.is_none());
        assert_eq!(resp.events[0].kind, EntityKind::Event);
        assert_eq!(resp.best_score(), Some(0.91));
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
    }

    #[test]
    fn test_integer_score_and_unknown_fields_round_trip() {
        let body = json!({
            "query": "sumpah",
            "search_type": "semantic",
            "persons": [],
            "events": [{
                "type": "event",
                "element_id": "4:aa:8",
                "name": "Sumpah Pemuda",
                "description": "Ikrar pemuda 1928",
                "image": null,
                "similarity_score": 1,
                "context": {
                    "country": "Indonesia",
                    "impact": "Persatuan",
                    "date": "1928-10-28",
                    "location": "Batavia"
                },
                "rank": 1
            }],
            "model": "multilingual-e5"
        });

        let resp: SemanticSearchResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resp.events[0].score(), 1.0);
        assert_eq!(resp.events[0].context.extra["location"], "Batavia");
        assert_eq!(resp.extra["model"], "multilingual-e5");
        assert_eq!(serde_json::to_string(&resp).unwrap(), body.to_string());
    }

    #[test]
    fn test_best_score_empty() {
        let resp = SemanticSearchResponse {
            query: "x".into(),
            search_type: "semantic".into(),
            persons: vec![],
            events: vec![],
            extra: Map::new(),
        };
        assert_eq!(resp.best_score(), None);
    }
}
