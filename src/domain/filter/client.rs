//! Filters sub-client — dropdown filter options.

use crate::client::KgClient;
use crate::domain::filter::DropdownFilterResponse;
use crate::error::ApiResult;

/// Sub-client for dropdown filter operations.
pub struct Filters<'a> {
    pub(crate) client: &'a KgClient,
}

impl<'a> Filters<'a> {
    pub async fn get(&self) -> ApiResult<DropdownFilterResponse> {
        self.client.http.get_filters().await
    }
}
