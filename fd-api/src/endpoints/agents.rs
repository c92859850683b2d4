//! Agent endpoints.

use serde::Serialize;

use crate::client::FreshdeskClient;
use crate::error::ApiResult;
use crate::request::{Query, RequestBody};
use crate::response::ApiResponse;

/// Filters for listing agents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `fulltime` or `occasional`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl FreshdeskClient {
    /// View an agent.
    pub async fn get_agent(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/agents/{id}"), None).await
    }

    /// List agents, optionally filtered.
    pub async fn list_all_agents(&self, filter: &AgentFilter) -> ApiResult<ApiResponse> {
        let query = Query::from_serialize(filter)?;
        self.get("/agents", Some(&query)).await
    }

    /// Update an agent.
    pub async fn update_agent<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(&format!("/agents/{id}"), Some(RequestBody::json(data)?))
            .await
    }

    /// Delete an agent (downgrades them to a contact).
    pub async fn delete_agent(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/agents/{id}")).await
    }

    /// The agent that owns the API key.
    pub async fn current_agent(&self) -> ApiResult<ApiResponse> {
        self.get("/agents/me", None).await
    }
}
