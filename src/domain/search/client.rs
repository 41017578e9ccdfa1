//! Search sub-client — keyword search.

use crate::client::KgClient;
use crate::domain::search::{SearchApiResponse, SearchRequest};
use crate::error::ApiResult;

/// Sub-client for keyword search operations.
pub struct Search<'a> {
    pub(crate) client: &'a KgClient,
}

impl<'a> Search<'a> {
    /// Run a keyword search. Pagination counts and filters travel in `request`.
    pub async fn run(&self, request: &SearchRequest) -> ApiResult<SearchApiResponse> {
        self.client.http.search(request).await
    }

    /// First page of results for `query` across all entity kinds.
    pub async fn query(&self, query: &str) -> ApiResult<SearchApiResponse> {
        self.run(&SearchRequest::new(query)).await
    }
}
