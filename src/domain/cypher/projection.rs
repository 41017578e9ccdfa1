//! Table and graph views over Cypher result rows.

use crate::domain::cypher::CypherRow;
use crate::shared::ElementId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

// ─── Table ───────────────────────────────────────────────────────────────────

/// Rows aligned to a shared column list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CypherTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl CypherTable {
    /// Columns are the union of row keys in first-seen order; missing cells are null.
    pub fn from_rows(rows: &[CypherRow]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for row in rows {
            for key in row.keys() {
                if seen.insert(key.as_str()) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| row.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub element_id: ElementId,
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub element_id: ElementId,
    #[serde(rename = "type")]
    pub kind: String,
    pub start_node_element_id: ElementId,
    pub end_node_element_id: ElementId,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Nodes and relationships extracted from result rows, deduplicated by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CypherGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl CypherGraph {
    pub fn from_rows(rows: &[CypherRow]) -> Self {
        let mut graph = CypherGraph::default();
        let mut node_ids = HashSet::new();
        let mut edge_ids = HashSet::new();
        for row in rows {
            for value in row.values() {
                graph.collect(value, &mut node_ids, &mut edge_ids);
            }
        }
        graph
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    fn collect(
        &mut self,
        value: &Value,
        node_ids: &mut HashSet<ElementId>,
        edge_ids: &mut HashSet<ElementId>,
    ) {
        match value {
            Value::Array(items) => {
                for item in items {
                    self.collect(item, node_ids, edge_ids);
                }
            }
            Value::Object(obj) => {
                if is_edge(obj) {
                    if let Ok(edge) = serde_json::from_value::<GraphEdge>(value.clone()) {
                        if edge_ids.insert(edge.element_id.clone()) {
                            self.edges.push(edge);
                        }
                        return;
                    }
                }
                if is_node(obj) {
                    if let Ok(node) = serde_json::from_value::<GraphNode>(value.clone()) {
                        if node_ids.insert(node.element_id.clone()) {
                            self.nodes.push(node);
                        }
                        return;
                    }
                }
                // Paths and maps can nest nodes.
                for nested in obj.values() {
                    self.collect(nested, node_ids, edge_ids);
                }
            }
            _ => {}
        }
    }
}

fn is_node(obj: &Map<String, Value>) -> bool {
    obj.contains_key("element_id") && obj.get("labels").is_some_and(Value::is_array)
}

fn is_edge(obj: &Map<String, Value>) -> bool {
    obj.contains_key("element_id")
        && obj.contains_key("type")
        && obj.contains_key("start_node_element_id")
        && obj.contains_key("end_node_element_id")
}
