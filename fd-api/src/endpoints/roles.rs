//! Role endpoints.

use crate::client::FreshdeskClient;
use crate::error::ApiResult;
use crate::response::ApiResponse;

impl FreshdeskClient {
    /// View a role.
    pub async fn get_role(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/roles/{id}"), None).await
    }

    /// List all roles.
    pub async fn list_all_roles(&self) -> ApiResult<ApiResponse> {
        self.get("/roles", None).await
    }
}
