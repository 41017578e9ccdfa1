//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in response
//! types without conversion overhead.

use crate::error::{ApiError, ApiResult, INVALID_ID_MESSAGE};
use serde::{Deserialize, Serialize};

/// Sentinel some callers pass when an id was never set.
const UNDEFINED_SENTINEL: &str = "undefined";

// ─── ElementId ───────────────────────────────────────────────────────────────

/// Graph element identifier (e.g. `"4:1f0a...:123"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric node id at the end of a Neo4j element id (`"4:<db>:123"` → `123`).
    ///
    /// `None` when the id has no `:`-separated numeric tail.
    pub fn local_id(&self) -> Option<u64> {
        let (_, tail) = self.0.rsplit_once(':')?;
        tail.parse().ok()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Check a path identifier before it is put into a URL.
///
/// Empty ids and the literal `"undefined"` are rejected.
pub fn validate_identifier(id: &str) -> ApiResult<&str> {
    if id.is_empty() || id == UNDEFINED_SENTINEL {
        return Err(ApiError::InvalidIdentifier(INVALID_ID_MESSAGE.to_string()));
    }
    Ok(id)
}

// ─── EntityKind ──────────────────────────────────────────────────────────────

/// The two entity kinds the explorer surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Event,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Event => "event",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
