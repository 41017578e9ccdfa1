//! Cypher domain — raw graph queries and their result rows.

#[cfg(feature = "http")]
pub mod client;
mod projection;

pub use projection::{CypherGraph, CypherTable, GraphEdge, GraphNode};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One result row: column name → value.
pub type CypherRow = Map<String, Value>;

/// Body of `POST /explore/cypher`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CypherQueryRequest {
    pub query: String,
}

impl CypherQueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Response of `POST /explore/cypher`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CypherQueryResponse {
    pub status: String,
    pub results: Vec<CypherRow>,
    /// Fields the backend sent beyond the typed ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CypherQueryResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Rows as a rectangular table.
    pub fn table(&self) -> CypherTable {
        CypherTable::from_rows(&self.results)
    }

    /// Nodes and relationships found anywhere in the rows.
    pub fn graph(&self) -> CypherGraph {
        CypherGraph::from_rows(&self.results)
    }

    /// Pretty-printed JSON of the rows.
    pub fn text(&self) -> String {
        // Serializing a Vec of JSON maps cannot fail.
        serde_json::to_string_pretty(&self.results).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_round_trip() {
        let body = json!({
            "status": "success",
            "results": [
                {"n.name": "Soekarno", "n.birth_year": 1901},
                {"n.name": "Hatta", "extra": [1, 2, {"k": null}]}
            ]
        });
        let resp: CypherQueryResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
    }

    #[test]
    fn test_rows_keep_server_key_order() {
        let raw = r#"{"status":"success","results":[{"n.name":"Soekarno","n.born":1901,"a":null}],"elapsed_ms":4}"#;
        let resp: CypherQueryResponse = serde_json::from_str(raw).unwrap();

        let keys: Vec<&str> = resp.results[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["n.name", "n.born", "a"]);
        assert_eq!(resp.table().columns, vec!["n.name", "n.born", "a"]);
        assert_eq!(resp.extra["elapsed_ms"], 4);
        assert_eq!(serde_json::to_string(&resp).unwrap(), raw);
        assert!(resp.text().find("n.name") < resp.text().find("n.born"));
    }

    #[test]
    fn test_text_projection() {
        let resp = CypherQueryResponse {
            status: "success".into(),
            results: vec![],
            extra: Map::new(),
        };
        assert!(resp.is_empty());
        assert_eq!(resp.text(), "[]");
    }
}
