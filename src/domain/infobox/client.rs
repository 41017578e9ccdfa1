//! Infobox sub-client — entity detail lookup.

use crate::client::KgClient;
use crate::domain::infobox::InfoboxResponse;
use crate::error::ApiResult;

/// Sub-client for infobox operations.
pub struct Infobox<'a> {
    pub(crate) client: &'a KgClient,
}

impl<'a> Infobox<'a> {
    /// Fetch the infobox for an element id.
    ///
    /// Empty ids and `"undefined"` fail with `ApiError::InvalidIdentifier`
    /// without touching the network.
    pub async fn get(&self, element_id: &str) -> ApiResult<InfoboxResponse> {
        self.client.http.get_infobox(element_id).await
    }
}
