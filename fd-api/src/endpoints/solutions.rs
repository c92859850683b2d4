//! Solution (knowledge base) endpoints: categories, folders, articles.
//!
//! Translated variants address a language by code (e.g. `de`) and require
//! the multilingual feature on the helpdesk.

use serde::Serialize;

use crate::client::FreshdeskClient;
use crate::error::ApiResult;
use crate::request::{Query, RequestBody};
use crate::response::ApiResponse;

impl FreshdeskClient {
    // --- Categories ---

    pub async fn create_solution_category<T: Serialize + ?Sized>(
        &self,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.post("/solutions/categories", RequestBody::json(data)?)
            .await
    }

    pub async fn create_translated_solution_category<T: Serialize + ?Sized>(
        &self,
        id: u64,
        language_code: &str,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.post(
            &format!("/solutions/categories/{id}/{language_code}"),
            RequestBody::json(data)?,
        )
        .await
    }

    pub async fn update_solution_category<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(
            &format!("/solutions/categories/{id}"),
            Some(RequestBody::json(data)?),
        )
        .await
    }

    pub async fn update_translated_solution_category<T: Serialize + ?Sized>(
        &self,
        id: u64,
        language_code: &str,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(
            &format!("/solutions/categories/{id}/{language_code}"),
            Some(RequestBody::json(data)?),
        )
        .await
    }

    pub async fn get_solution_category(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/solutions/categories/{id}"), None).await
    }

    pub async fn list_all_solution_categories(&self) -> ApiResult<ApiResponse> {
        self.get("/solutions/categories", None).await
    }

    /// Delete a category together with all its translations.
    pub async fn delete_solution_category(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/solutions/categories/{id}")).await
    }

    // --- Folders ---

    /// Create a folder inside category `category_id`.
    pub async fn create_solution_folder<T: Serialize + ?Sized>(
        &self,
        category_id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.post(
            &format!("/solutions/categories/{category_id}/folders"),
            RequestBody::json(data)?,
        )
        .await
    }

    pub async fn create_translated_solution_folder<T: Serialize + ?Sized>(
        &self,
        id: u64,
        language_code: &str,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.post(
            &format!("/solutions/folders/{id}/{language_code}"),
            RequestBody::json(data)?,
        )
        .await
    }

    pub async fn update_solution_folder<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(
            &format!("/solutions/folders/{id}"),
            Some(RequestBody::json(data)?),
        )
        .await
    }

    pub async fn update_translated_solution_folder<T: Serialize + ?Sized>(
        &self,
        id: u64,
        language_code: &str,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(
            &format!("/solutions/folders/{id}/{language_code}"),
            Some(RequestBody::json(data)?),
        )
        .await
    }

    pub async fn get_solution_folder(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/solutions/folders/{id}"), None).await
    }

    pub async fn list_all_solution_category_folders(&self, category_id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/solutions/categories/{category_id}/folders"), None)
            .await
    }

    pub async fn delete_solution_folder(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/solutions/folders/{id}")).await
    }

    // --- Articles ---

    /// Create an article inside folder `folder_id`.
    pub async fn create_solution_article<T: Serialize + ?Sized>(
        &self,
        folder_id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.post(
            &format!("/solutions/folders/{folder_id}/articles"),
            RequestBody::json(data)?,
        )
        .await
    }

    pub async fn create_translated_solution_article<T: Serialize + ?Sized>(
        &self,
        id: u64,
        language_code: &str,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.post(
            &format!("/solutions/articles/{id}/{language_code}"),
            RequestBody::json(data)?,
        )
        .await
    }

    pub async fn update_solution_article<T: Serialize + ?Sized>(
        &self,
        id: u64,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(
            &format!("/solutions/articles/{id}"),
            Some(RequestBody::json(data)?),
        )
        .await
    }

    pub async fn update_translated_solution_article<T: Serialize + ?Sized>(
        &self,
        id: u64,
        language_code: &str,
        data: &T,
    ) -> ApiResult<ApiResponse> {
        self.put(
            &format!("/solutions/articles/{id}/{language_code}"),
            Some(RequestBody::json(data)?),
        )
        .await
    }

    pub async fn get_solution_article(&self, id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/solutions/articles/{id}"), None).await
    }

    pub async fn get_translated_solution_article(
        &self,
        id: u64,
        language_code: &str,
    ) -> ApiResult<ApiResponse> {
        self.get(&format!("/solutions/articles/{id}/{language_code}"), None)
            .await
    }

    pub async fn list_all_solution_folder_articles(&self, folder_id: u64) -> ApiResult<ApiResponse> {
        self.get(&format!("/solutions/folders/{folder_id}/articles"), None)
            .await
    }

    pub async fn delete_solution_article(&self, id: u64) -> ApiResult<ApiResponse> {
        self.delete(&format!("/solutions/articles/{id}")).await
    }

    /// Full-text search over solution articles.
    pub async fn search_solution_articles(&self, term: &str) -> ApiResult<ApiResponse> {
        let query = Query::new().push("term", term);
        self.get("/search/solutions", Some(&query)).await
    }
}
