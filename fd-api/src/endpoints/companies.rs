//! Company endpoints.

use serde::Serialize;

use crate::client::FreshdeskClient;
use crate::endpoints::quoted;
use crate::error::ApiResult;
use crate::request::{Query, RequestBody};
use crate::response::ApiResponse;

impl FreshdeskClient {
    /// Create a company. Company names are unique; a duplicate yields a 409.
    pub async fn create_company<T: Serialize + ?Sized>(&self, data: &T) -> ApiResult<ApiResponse> {
        self.post("/companies", RequestBody::json(data)?).await
    }

    /// View a company.
    pub async fn get_company(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/companies/{id}"), None).await
    }

    /// Autocomplete companies by name.
    pub async fn search_company(&self, name: &str) -> ApiResult<ApiResponse> {
        let query = Query::new().push("name", name);
        self.get("/companies/autocomplete", Some(&query)).await
    }

    /// List companies, one page at a time (first page when `page` is None).
    pub async fn list_all_companies(&self, page: Option<u32>) -> ApiResult<ApiResponse> {
        let query = Query::new().push("page", page.unwrap_or(1));
        self.get("/companies", Some(&query)).await
    }

    /// Search companies with a query expression.
    pub async fn filter_companies(&self, query: &str) -> ApiResult<ApiResponse> {
        let query = Query::new().push("query", quoted(query));
        self.get("/search/companies", Some(&query)).await
    }

    /// List company fields.
    pub async fn list_all_company_fields(&self) -> ApiResult<ApiResponse> {
        self.get("/company_fields", None).await
    }

    /// Update a company.
    pub async fn update_company<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(&format!("/companies/{id}"), Some(RequestBody::json(data)?))
            .await
    }

    /// Delete a company. Associated contacts are kept but unlinked.
    pub async fn delete_company(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/companies/{id}")).await
    }
}
