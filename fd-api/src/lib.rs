//! Freshdesk API - HTTP client for the Freshdesk REST API v2.
//!
//! This crate provides a client covering the ticket, conversation, contact,
//! agent, role, company, time entry, solution and settings endpoints. Every
//! call sends exactly one request and normalizes the outcome into either an
//! [`ApiResponse`] (payload plus pagination and request-id metadata) or an
//! [`ApiError`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;

// Re-export key types
pub use client::{basic_auth_header, FreshdeskClient};
pub use endpoints::agents::AgentFilter;
pub use endpoints::contacts::ContactsFilter;
pub use endpoints::tickets::TicketsFilter;
pub use endpoints::time_entries::TimeEntryFilter;
pub use error::{ApiError, ApiResult, FieldError, FreshdeskError};
pub use request::{ApiTarget, Attachment, MultipartBody, Query, RequestBody};
pub use response::{classify, normalize, ApiResponse, Extra, RawResponse};
