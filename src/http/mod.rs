//! HTTP client layer — `KgHttp` with one method per endpoint.

pub mod client;
pub mod endpoint;

pub use client::KgHttp;
pub use endpoint::Endpoint;
