//! Ticket endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::FreshdeskClient;
use crate::endpoints::quoted;
use crate::error::ApiResult;
use crate::request::{Attachment, Query, RequestBody};
use crate::response::ApiResponse;

/// Filters for listing tickets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketsFilter {
    /// Predefined filter: `new_and_my_open`, `watching`, `spam`, `deleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    /// Embeds, e.g. `requester,stats`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl FreshdeskClient {
    /// List tickets, optionally filtered.
    pub async fn list_all_tickets(&self, filter: &TicketsFilter) -> ApiResult<ApiResponse> {
        let query = Query::from_serialize(filter)?;
        self.get("/tickets", Some(&query)).await
    }

    /// Search tickets with a query expression such as `"priority:3"`.
    pub async fn filter_tickets(&self, query: &str, page: Option<u32>) -> ApiResult<ApiResponse> {
        let query = Query::new()
            .push("query", quoted(query))
            .push("page", page.unwrap_or(1));
        self.get("/search/tickets", Some(&query)).await
    }

    /// List ticket fields, optionally only those of one type.
    pub async fn list_all_ticket_fields(&self, field_type: Option<&str>) -> ApiResult<ApiResponse> {
        let query = Query::new().push_opt("type", field_type);
        self.get("/ticket_fields", Some(&query)).await
    }

    /// Create a ticket.
    pub async fn create_ticket<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.post("/tickets", RequestBody::json(data)?).await
    }

    /// Create a ticket with file attachments (sent as multipart form data).
    pub async fn create_ticket_with_attachments<T: Serialize + ?Sized>(
        &self,
        data: &T,
        attachments: Vec<Attachment>,
    ) -> ApiResult<ApiResponse> {
        self.post("/tickets", RequestBody::with_attachments(data, attachments)?)
            .await
    }

    /// View a ticket.
    pub async fn get_ticket(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/tickets/{id}"), None).await
    }

    /// Update a ticket.
    pub async fn update_ticket<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(&format!("/tickets/{id}"), Some(RequestBody::json(data)?))
            .await
    }

    /// Update a ticket and add attachments to it.
    pub async fn update_ticket_with_attachments<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
        attachments: Vec<Attachment>,
    ) -> ApiResult<ApiResponse> {
        let body = RequestBody::with_attachments(data, attachments)?;
        self.put(&format!("/tickets/{id}"), Some(body)).await
    }

    /// Delete a ticket (moves it to trash).
    pub async fn delete_ticket(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/tickets/{id}")).await
    }

    /// Restore a deleted ticket.
    pub async fn restore_ticket(&self, id: u64) -> ApiResult<ApiResponse> {
        self.put(&format!("/tickets/{id}/restore"), None).await
    }

    /// List all conversations of a ticket.
    pub async fn list_all_conversations(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/tickets/{id}/conversations"), None).await
    }

    /// List all time entries of a ticket.
    pub async fn list_all_ticket_time_entries(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/tickets/{id}/time_entries"), None).await
    }
}
