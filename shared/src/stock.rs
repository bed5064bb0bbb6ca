//! Stock status and per-warehouse stock adjustments

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Product, Stock};
use crate::types::{AdjustmentAction, StockLevel, StockStatus};

/// Transient stock-adjustment form value. String-typed; parsed on use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    pub quantity: String,
    pub warehouse_id: String,
}

/// A validated adjustment, ready to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAdjustment {
    pub quantity: i64,
    pub warehouse_id: i64,
}

/// Validation failures for a stock adjustment. Returned as values, never
/// thrown; the caller surfaces the message next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustmentError {
    #[error("Please select warehouse and enter quantity")]
    MissingField,
    #[error("Please enter valid quantity")]
    InvalidQuantity,
    #[error("No stock entry for the selected warehouse")]
    UnknownWarehouse,
}

/// Total quantity across all of a product's warehouses.
pub fn calculate_total_stock(product: &Product) -> i64 {
    product.total_quantity()
}

/// Aggregate stock status. Total > 10 is in stock, 1..=10 is low stock
/// (10 itself is low, not in stock), 0 is out of stock.
pub fn calculate_stock_status(product: &Product) -> StockStatus {
    let total_stock = calculate_total_stock(product);
    let level = if total_stock > 10 {
        StockLevel::InStock
    } else if total_stock > 0 {
        StockLevel::LowStock
    } else {
        StockLevel::OutOfStock
    };
    StockStatus { total_stock, level }
}

/// Validate an adjustment: both fields present, quantity an integer, and
/// the warehouse id parseable.
pub fn validate_adjustment(adjustment: &StockAdjustment) -> Result<ParsedAdjustment, AdjustmentError> {
    if adjustment.quantity.is_empty() || adjustment.warehouse_id.is_empty() {
        return Err(AdjustmentError::MissingField);
    }

    let quantity: i64 = adjustment
        .quantity
        .trim()
        .parse()
        .map_err(|_| AdjustmentError::InvalidQuantity)?;

    let warehouse_id: i64 = adjustment
        .warehouse_id
        .trim()
        .parse()
        .map_err(|_| AdjustmentError::UnknownWarehouse)?;

    Ok(ParsedAdjustment {
        quantity,
        warehouse_id,
    })
}

/// Build the updated stocks array for a PATCH: the stock whose id matches
/// the adjustment's warehouse gets current ± delta.
///
/// The resulting quantity is not floored at zero; a remove larger than the
/// current quantity goes negative, matching what the backend accepts.
pub fn adjust_stocks(
    product: &Product,
    adjustment: &ParsedAdjustment,
    action: AdjustmentAction,
) -> Result<Vec<Stock>, AdjustmentError> {
    if !product
        .stocks
        .iter()
        .any(|s| s.id == adjustment.warehouse_id)
    {
        return Err(AdjustmentError::UnknownWarehouse);
    }

    Ok(product
        .stocks
        .iter()
        .map(|stock| {
            if stock.id == adjustment.warehouse_id {
                let quantity = match action {
                    AdjustmentAction::Add => stock.quantity + adjustment.quantity,
                    AdjustmentAction::Remove => stock.quantity - adjustment.quantity,
                };
                Stock {
                    quantity,
                    ..stock.clone()
                }
            } else {
                stock.clone()
            }
        })
        .collect())
}
