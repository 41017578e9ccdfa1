//! Search domain — keyword search with pagination counts and filters.

#[cfg(feature = "http")]
pub mod client;

use crate::shared::{ElementId, EntityKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── SearchType ──────────────────────────────────────────────────────────────

/// Which entity kinds a keyword search should return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    All,
    Person,
    Event,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::All => "all",
            SearchType::Person => "person",
            SearchType::Event => "event",
        }
    }
}

// ─── Request ─────────────────────────────────────────────────────────────────

/// Body of `POST /search`.
///
/// The counts tell the backend how many results the caller already holds,
/// so the next page starts after them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub current_person_count: u32,
    pub current_event_count: u32,
    pub search_type: SearchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_country: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_continent: Option<Vec<String>>,
}

impl SearchRequest {
    /// First-page search over all kinds, no filters.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            current_person_count: 0,
            current_event_count: 0,
            search_type: SearchType::All,
            filter_country: None,
            filter_continent: None,
        }
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn counts(mut self, persons: u32, events: u32) -> Self {
        self.current_person_count = persons;
        self.current_event_count = events;
        self
    }

    pub fn countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_country = Some(countries.into_iter().map(Into::into).collect());
        self
    }

    pub fn continents<I, S>(mut self, continents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_continent = Some(continents.into_iter().map(Into::into).collect());
        self
    }
}

// ─── Response ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonContext {
    pub positions: Vec<String>,
    pub primary_position: String,
    pub country: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSearchResult {
    /// Always `person`.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub element_id: ElementId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub context: PersonContext,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    pub country: String,
    pub impact: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSearchResult {
    /// Always `event`.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub element_id: ElementId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub context: EventContext,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of results plus the total the backend found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<T> {
    pub data: Vec<T>,
    pub total_found: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ResultPage<T> {
    /// Whether results remain beyond the `fetched` ones the caller holds.
    pub fn has_more(&self, fetched: u32) -> bool {
        self.total_found > u64::from(fetched)
    }
}

/// Response of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchApiResponse {
    pub query: String,
    pub persons: ResultPage<PersonSearchResult>,
    pub events: ResultPage<EventSearchResult>,
    /// Fields the backend sent beyond the typed ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchApiResponse {
    pub fn has_more_persons(&self, fetched: u32) -> bool {
        self.persons.has_more(fetched)
    }

    pub fn has_more_events(&self, fetched: u32) -> bool {
        self.events.has_more(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_filters() {
        let req = SearchRequest::new("Soekarno");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "Soekarno",
                "current_person_count": 0,
                "current_event_count": 0,
                "search_type": "all"
            })
        );
    }

    #[test]
    fn test_request_with_filters() {
        let req = SearchRequest::new("perang")
            .search_type(SearchType::Event)
            .counts(10, 5)
            .countries(["Indonesia"])
            .continents(vec!["Asia".to_string(), "Eropa".to_string()]);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["search_type"], "event");
        assert_eq!(value["current_person_count"], 10);
        assert_eq!(value["current_event_count"], 5);
        assert_eq!(value["filter_country"], json!(["Indonesia"]));
        assert_eq!(value["filter_continent"], json!(["Asia", "Eropa"]));
    }

    #[test]
    fn test_response_round_trip() {
        let body = json!({
            "query": "Soekarno",
            "persons": {
                "data": [{
                    "type": "person",
                    "element_id": "4:aa:1",
                    "name": "Soekarno",
                    "description": "Presiden pertama Indonesia",
                    "image": "https://example.org/soekarno.jpg",
                    "context": {
                        "positions": ["Presiden Indonesia"],
                        "primary_position": "Presiden Indonesia",
                        "country": "Indonesia"
                    }
                }],
                "total_found": 1
            },
            "events": { "data": [], "total_found": 0 }
        });

        let resp: SearchApiResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resp.persons.data[0].kind, EntityKind::Person);
        assert_eq!(resp.persons.data[0].element_id.as_str(), "4:aa:1");
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
    }

    #[test]
    fn test_response_keeps_unknown_fields() {
        let mut body = json!({
            "query": "Hatta",
            "persons": {
                "data": [{
                    "type": "person",
                    "element_id": "4:aa:2",
                    "name": "Mohammad Hatta",
                    "description": "Wakil presiden pertama",
                    "image": "",
                    "context": {
                        "positions": [],
                        "primary_position": "Wakil Presiden",
                        "country": "Indonesia",
                        "continent": "Asia"
                    },
                    "score": 3
                }],
                "total_found": 1,
                "page": 1
            },
            "events": { "data": [], "total_found": 0 }
        });
        body["took_ms"] = json!(12);

        let resp: SearchApiResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resp.extra["took_ms"], 12);
        assert_eq!(resp.persons.extra["page"], 1);
        assert_eq!(resp.persons.data[0].context.extra["continent"], "Asia");
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
    }

    #[test]
    fn test_has_more() {
        let page: ResultPage<EventSearchResult> = ResultPage {
            data: vec![],
            total_found: 12,
            extra: Map::new(),
        };
        assert!(page.has_more(10));
        assert!(!page.has_more(12));
        assert!(!page.has_more(20));
    }
}
