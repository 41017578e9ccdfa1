//! Display formatting for infobox facts and relations.

use crate::domain::infobox::{InfoboxProperties, RelatedNode};
use crate::shared::ElementId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Properties shown in the infobox header rather than the fact table.
const DISPLAY_KEYS: [&str; 2] = ["name", "image"];

/// A label/value pair for the infobox property table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedFact {
    pub label: String,
    pub value: String,
}

/// A related entity ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRelation {
    pub element_id: ElementId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub relation: String,
    pub image: String,
    pub properties: InfoboxProperties,
}

impl From<&RelatedNode> for FormattedRelation {
    fn from(node: &RelatedNode) -> Self {
        let text = |key: &str| node.properties.get(key).and_then(Value::as_str);
        Self {
            element_id: node.element_id.clone(),
            name: text("name")
                .map(str::to_string)
                .unwrap_or_else(|| node.element_id.to_string()),
            kind: node
                .labels
                .first()
                .map(|l| l.to_lowercase())
                .unwrap_or_default(),
            relation: node.relationship.clone(),
            image: text("image").map(str::to_string).unwrap_or_default(),
            properties: node.properties.clone(),
        }
    }
}

pub(crate) fn facts(properties: &InfoboxProperties) -> Vec<FormattedFact> {
    let mut keys: Vec<&String> = properties
        .keys()
        .filter(|k| !DISPLAY_KEYS.contains(&k.as_str()))
        .collect();
    keys.sort();

    keys.into_iter()
        .filter_map(|key| {
            let value = render(&properties[key.as_str()])?;
            Some(FormattedFact {
                label: humanize(key),
                value,
            })
        })
        .collect()
}

/// `birth_date` → `Birth date`.
fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render).collect();
            Some(parts.join(", "))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}
