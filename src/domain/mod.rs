//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Request/response types matching the backend payloads
//! - `client.rs` — Sub-client with HTTP methods
//! - extra helpers where the UI needs a derived view (Cypher projections,
//!   infobox formatting, the offline suggestion source)

pub mod cypher;
pub mod filter;
pub mod infobox;
pub mod search;
pub mod semantic;
pub mod suggestion;
