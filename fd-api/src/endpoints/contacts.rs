//! Contact endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::FreshdeskClient;
use crate::endpoints::quoted;
use crate::error::ApiResult;
use crate::request::{Query, RequestBody};
use crate::response::ApiResponse;

/// Filters for listing contacts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    /// One of `blocked`, `deleted`, `unverified`, `verified`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "_updated_since", skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl FreshdeskClient {
    /// Create a contact.
    pub async fn create_contact<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.post("/contacts", RequestBody::json(data)?).await
    }

    /// View a contact.
    pub async fn get_contact(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/contacts/{id}"), None).await
    }

    /// List contacts, optionally filtered.
    pub async fn list_all_contacts(&self, filter: &ContactsFilter) -> ApiResult<ApiResponse> {
        let query = Query::from_serialize(filter)?;
        self.get("/contacts", Some(&query)).await
    }

    /// Update a contact.
    pub async fn update_contact<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(&format!("/contacts/{id}"), Some(RequestBody::json(data)?))
            .await
    }

    /// Soft-delete a contact.
    pub async fn delete_contact(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/contacts/{id}")).await
    }

    /// Convert a contact into an agent.
    pub async fn make_agent(&self, id: u64) -> ApiResult<ApiResponse> {
        self.put(&format!("/contacts/{id}/make_agent"), None).await
    }

    /// List contact fields.
    pub async fn list_all_contact_fields(&self) -> ApiResult<ApiResponse> {
        self.get("/contact_fields", None).await
    }

    /// Search contacts, e.g. `"(company_id:1 OR company_id:2) AND active:true"`.
    pub async fn filter_contacts(&self, query: &str) -> ApiResult<ApiResponse> {
        let query = Query::new().push("query", quoted(query));
        self.get("/search/contacts", Some(&query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts_filter_renames_updated_since() {
        let filter = ContactsFilter {
            state: Some("verified".into()),
            updated_since: Some(DateTime::parse_from_rfc3339("2020-02-01T00:00:00Z").unwrap().with_timezone(&Utc)),
            ..Default::default()
        };
        let q = Query::from_serialize(&filter).unwrap();
        assert_eq!(q.get("state"), Some("verified"));
        assert_eq!(q.get("_updated_since"), Some("2020-02-01T00:00:00Z"));
    }
}
