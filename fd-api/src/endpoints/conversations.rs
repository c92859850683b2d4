//! Conversation endpoints: replies and notes on tickets.

use serde::Serialize;

use crate::client::FreshdeskClient;
use crate::error::ApiResult;
use crate::request::{Attachment, RequestBody};
use crate::response::ApiResponse;

impl FreshdeskClient {
    /// Reply to a ticket.
    pub async fn create_reply<T: Serialize + ?Sized>(
        &self,
        ticket_id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.create_reply_with_attachments(ticket_id, data, Vec::new())
            .await
    }

    /// Reply to a ticket with attachments.
    pub async fn create_reply_with_attachments<T: Serialize + ?Sized>(
        &self,
        ticket_id: u64,
        data: &T,
        attachments: Vec<Attachment>,
    ) -> ApiResult<ApiResponse> {
        let body = RequestBody::with_attachments(data, attachments)?;
        self.post(&format!("/tickets/{ticket_id}/reply"), body).await
    }

    /// Add a note to a ticket.
    pub async fn create_note<T: Serialize + ?Sized>(
        &self,
        ticket_id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.create_note_with_attachments(ticket_id, data, Vec::new())
            .await
    }

    /// Add a note with attachments.
    pub async fn create_note_with_attachments<T: Serialize + ?Sized>(
        &self,
        ticket_id: u64,
        data: &T,
        attachments: Vec<Attachment>,
    ) -> ApiResult<ApiResponse> {
        let body = RequestBody::with_attachments(data, attachments)?;
        self.post(&format!("/tickets/{ticket_id}/notes"), body).await
    }

    /// Update a note (only notes can be updated).
    pub async fn update_conversation<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(&format!("/conversations/{id}"), Some(RequestBody::json(data)?))
            .await
    }

    /// Delete a conversation.
    pub async fn delete_conversation(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/conversations/{id}")).await
    }
}
