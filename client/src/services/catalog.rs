//! Product catalog: list, filter, and free-text search
//!
//! Filtering is entirely client-side over the fetched list; the backend is
//! only asked for the full catalog.

use shared::filter::{self, ProductFilter};
use shared::models::Product;

use crate::api::ApiClient;
use crate::error::AppResult;

/// Catalog service
#[derive(Clone)]
pub struct CatalogService {
    api: ApiClient,
}

impl CatalogService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the full product list.
    pub async fn fetch_products(&self) -> AppResult<Vec<Product>> {
        self.api.get_products().await
    }

    /// Fetch and apply the filter modal's spec (AND semantics + sort).
    pub async fn filtered(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        let products = self.fetch_products().await?;
        Ok(filter.apply(&products))
    }

    /// Fetch and apply the free-text search box (OR semantics).
    pub async fn search(&self, query: &str) -> AppResult<Vec<Product>> {
        let products = self.fetch_products().await?;
        Ok(filter::search(&products, query))
    }
}
