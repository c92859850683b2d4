//! Time entry endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::FreshdeskClient;
use crate::error::ApiResult;
use crate::request::{Query, RequestBody};
use crate::response::ApiResponse;

/// Filters for listing time entries.
///
/// `billable` is sent as `true`/`false`; timestamps as RFC 3339.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeEntryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_before: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl FreshdeskClient {
    /// Create a time entry on a ticket.
    pub async fn create_time_entry<T: Serialize + ?Sized>(
        &self,
        ticket_id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.post(
            &format!("/tickets/{ticket_id}/time_entries"),
            RequestBody::json(data)?,
        )
        .await
    }

    /// List time entries across tickets.
    pub async fn list_all_time_entries(&self, filter: &TimeEntryFilter) -> ApiResult<ApiResponse> {
        let query = Query::from_serialize(filter)?;
        self.get("/time_entries", Some(&query)).await
    }

    /// Update a time entry.
    pub async fn update_time_entry<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(&format!("/time_entries/{id}"), Some(RequestBody::json(data)?))
            .await
    }

    /// Start or stop the timer of a time entry.
    pub async fn toggle_timer(&self, id: u64) -> ApiResult<ApiResponse> {
        self.put(&format!("/time_entries/{id}/toggle_timer"), None)
            .await
    }

    /// Delete a time entry. Deleted entries cannot be restored.
    pub async fn delete_time_entry(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/time_entries/{id}")).await
    }
}
