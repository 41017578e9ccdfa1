//! Semantic search sub-client.

use crate::client::KgClient;
use crate::domain::semantic::{SemanticSearchRequest, SemanticSearchResponse};
use crate::error::ApiResult;

/// Sub-client for semantic search operations.
pub struct Semantic<'a> {
    pub(crate) client: &'a KgClient,
}

impl<'a> Semantic<'a> {
    pub async fn search(
        &self,
        request: &SemanticSearchRequest,
    ) -> ApiResult<SemanticSearchResponse> {
        self.client.http.semantic_search(request).await
    }
}
