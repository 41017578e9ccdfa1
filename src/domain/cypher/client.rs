//! Cypher sub-client — raw graph query execution.

use crate::client::KgClient;
use crate::domain::cypher::{CypherQueryRequest, CypherQueryResponse};
use crate::error::ApiResult;

/// Sub-client for Cypher query operations.
pub struct Cypher<'a> {
    pub(crate) client: &'a KgClient,
}

impl<'a> Cypher<'a> {
    /// Execute a Cypher query on the backend.
    pub async fn execute(&self, query: &str) -> ApiResult<CypherQueryResponse> {
        self.client
            .http
            .execute_cypher(&CypherQueryRequest::new(query))
            .await
    }
}
