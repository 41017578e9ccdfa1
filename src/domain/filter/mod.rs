//! Filter domain — dropdown options for the search filters.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single dropdown entry. `value` is what goes into the search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /search/filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownFilterResponse {
    pub countries: Vec<FilterOption>,
    pub continents: Vec<FilterOption>,
    /// Fields the backend sent beyond the typed ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DropdownFilterResponse {
    /// Values of the selected country labels, ready for `SearchRequest::countries`.
    pub fn country_values<'a>(&'a self, selected: &'a [&str]) -> impl Iterator<Item = &'a str> {
        pick(&self.countries, selected)
    }

    /// Values of the selected continent labels, ready for `SearchRequest::continents`.
    pub fn continent_values<'a>(&'a self, selected: &'a [&str]) -> impl Iterator<Item = &'a str> {
        pick(&self.continents, selected)
    }
}

fn pick<'a>(options: &'a [FilterOption], selected: &'a [&str]) -> impl Iterator<Item = &'a str> {
    options
        .iter()
        .filter(move |o| selected.iter().any(|s| *s == o.label))
        .map(|o| o.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_and_pick() {
        let body = json!({
            "countries": [
                {"label": "Indonesia", "value": "ID", "count": 120},
                {"label": "Belanda", "value": "NL"}
            ],
            "continents": [{"label": "Asia", "value": "asia"}],
            "updated_at": "2025-01-15"
        });
        let resp: DropdownFilterResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(serde_json::to_value(&resp).unwrap(), body);
        assert_eq!(resp.countries[0].extra["count"], 120);
        assert_eq!(resp.extra["updated_at"], "2025-01-15");

        let countries: Vec<&str> = resp.country_values(&["Belanda", "Jepang"]).collect();
        assert_eq!(countries, vec!["NL"]);
        let continents: Vec<&str> = resp.continent_values(&["Asia"]).collect();
        assert_eq!(continents, vec!["asia"]);
    }
}
