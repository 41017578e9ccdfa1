//! Network constants for the knowledge-graph explorer API.

/// Default REST API base URL (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the API base URL.
pub const API_BASE_ENV: &str = "KG_API_BASE_URL";

/// Variable name the web frontend uses; read when `API_BASE_ENV` is unset or blank.
pub const LEGACY_API_BASE_ENV: &str = "NUXT_PUBLIC_API_BASE_URL";
