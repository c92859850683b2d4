//! Helpdesk settings endpoint.

use crate::client::FreshdeskClient;
use crate::error::ApiResult;
use crate::response::ApiResponse;

impl FreshdeskClient {
    /// View helpdesk settings (languages, default language, ...).
    pub async fn get_settings(&self) -> ApiResult<ApiResponse> {
        self.get("/settings/helpdesk", None).await
    }
}
