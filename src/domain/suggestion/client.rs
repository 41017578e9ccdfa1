//! Suggestions sub-client — backend or offline source, chosen at build time.

use crate::client::KgClient;
use crate::domain::suggestion::SuggestionResponse;
use crate::error::ApiResult;

/// Sub-client for search suggestion operations.
pub struct Suggestions<'a> {
    pub(crate) client: &'a KgClient,
}

impl<'a> Suggestions<'a> {
    /// Autocomplete candidates for `query`.
    ///
    /// With the offline source enabled this never fails.
    pub async fn get(&self, query: &str) -> ApiResult<SuggestionResponse> {
        match &self.client.mock_suggestions {
            Some(mock) => Ok(mock.suggest(query).await),
            None => self.client.http.get_suggestions(query).await,
        }
    }
}
