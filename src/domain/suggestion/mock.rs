//! Offline suggestion source.
//!
//! Stands in for `GET /search/suggestions` while the backend endpoint is not
//! available: waits a fixed delay, then filters a built-in record list by
//! case-insensitive substring match on the name.

use crate::domain::suggestion::{SuggestionItem, SuggestionResponse};
use crate::shared::{ElementId, EntityKind};
use serde_json::Map;
use std::time::Duration;

/// Simulated network latency.
pub const MOCK_DELAY: Duration = Duration::from_millis(300);

const FIXTURES: [(&str, &str, EntityKind); 10] = [
    ("mock:1", "Soekarno", EntityKind::Person),
    ("mock:2", "Mohammad Hatta", EntityKind::Person),
    ("mock:3", "Sutan Sjahrir", EntityKind::Person),
    ("mock:4", "Raden Ajeng Kartini", EntityKind::Person),
    ("mock:5", "Ki Hajar Dewantara", EntityKind::Person),
    ("mock:6", "Soeharto", EntityKind::Person),
    ("mock:7", "Proklamasi Kemerdekaan Indonesia", EntityKind::Event),
    ("mock:8", "Sumpah Pemuda", EntityKind::Event),
    ("mock:9", "Pertempuran Surabaya", EntityKind::Event),
    ("mock:10", "Konferensi Meja Bundar", EntityKind::Event),
];

#[derive(Debug, Clone)]
pub struct MockSuggestions {
    records: Vec<SuggestionItem>,
    delay: Duration,
}

impl Default for MockSuggestions {
    fn default() -> Self {
        let records = FIXTURES
            .iter()
            .map(|(id, text, kind)| SuggestionItem {
                element_id: ElementId::from(*id),
                text: text.to_string(),
                kind: *kind,
                extra: Map::new(),
            })
            .collect();
        Self::new(records, MOCK_DELAY)
    }
}

impl MockSuggestions {
    pub fn new(records: Vec<SuggestionItem>, delay: Duration) -> Self {
        Self { records, delay }
    }

    pub fn records(&self) -> &[SuggestionItem] {
        &self.records
    }

    /// Resolve after the configured delay with the matching records.
    ///
    /// A blank query yields an empty list, still after the delay.
    pub async fn suggest(&self, query: &str) -> SuggestionResponse {
        futures_timer::Delay::new(self.delay).await;
        SuggestionResponse {
            suggestions: self.matching(query),
            ..Default::default()
        }
    }

    /// The filtering step alone, without the delay.
    pub fn matching(&self, query: &str) -> Vec<SuggestionItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|r| r.text.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
