//! API endpoint modules organized by Freshdesk resource.
//!
//! Each module adds typed methods to `FreshdeskClient` for one group of
//! related endpoints. Every method returns the normalized `ApiResponse`.

pub mod tickets;
pub mod conversations;
pub mod contacts;
pub mod agents;
pub mod roles;
pub mod companies;
pub mod time_entries;
pub mod solutions;
pub mod settings;

/// Wrap a search expression the way the search endpoints expect it.
pub(crate) fn quoted(query: &str) -> String {
    format!("\"{query}\"")
}
