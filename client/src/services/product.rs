//! Product detail and per-warehouse stock adjustment

use shared::models::Product;
use shared::stock::{self, StockAdjustment};
use shared::types::{AdjustmentAction, StockStatus};

use crate::api::ApiClient;
use crate::error::AppResult;

/// Product detail service
#[derive(Clone)]
pub struct ProductService {
    api: ApiClient,
}

impl ProductService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch a single product.
    pub async fn get_product_details(&self, product_id: i64) -> AppResult<Product> {
        self.api.get_product(product_id).await
    }

    /// Aggregate stock status of the current product state. Recomputed on
    /// every call; never cached across mutations.
    pub fn stock_status(&self, product: &Product) -> StockStatus {
        stock::calculate_stock_status(product)
    }

    /// Apply an add/remove delta to the selected warehouse's quantity and
    /// persist the full stocks array. Returns the server's resulting
    /// product state; the caller replaces its copy with it and resets the
    /// adjustment input.
    pub async fn update_product_stock(
        &self,
        product: &Product,
        adjustment: &StockAdjustment,
        action: AdjustmentAction,
    ) -> AppResult<Product> {
        let parsed = stock::validate_adjustment(adjustment)?;
        let stocks = stock::adjust_stocks(product, &parsed, action)?;

        tracing::debug!(
            product_id = product.id,
            warehouse_id = parsed.warehouse_id,
            action = action.as_str(),
            delta = parsed.quantity,
            "Persisting stock adjustment"
        );

        self.api.patch_stocks(product.id, &stocks).await
    }
}
