//! Derived dashboard statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product entry in the "most added" / "most removed" rankings.
///
/// Ranking is by edit recency, not add/remove delta magnitude; true deltas
/// are not derivable from the edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
}

/// Per-city stock rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStocks {
    pub city: String,
    /// Number of products with at least one stock in this city.
    pub total_products: i64,
    /// Summed quantity of those products' stocks located in this city.
    pub total_quantity: i64,
}

/// Aggregate statistics over the full product list. Derived, never stored;
/// recomputed fully on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_products: i64,
    pub total_cities: i64,
    pub out_of_stock: i64,
    pub total_stock_value: Decimal,
    pub most_added_products: Vec<RankedProduct>,
    pub most_removed_products: Vec<RankedProduct>,
    pub stocks_by_city: Vec<CityStocks>,
}
