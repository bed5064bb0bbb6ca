//! Small enums shared across services and the CLI

use serde::{Deserialize, Serialize};

/// Aggregate stock level of a product, derived from the sum of its
/// per-warehouse quantities. Thresholds are fixed at 0 and 10 units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    /// User-facing label, kept in French as shipped.
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::InStock => "En stock",
            StockLevel::LowStock => "Stock faible",
            StockLevel::OutOfStock => "Rupture de stock",
        }
    }

    /// Display-only severity tag attached to the label.
    pub fn severity(&self) -> &'static str {
        match self {
            StockLevel::InStock => "success",
            StockLevel::LowStock => "warning",
            StockLevel::OutOfStock => "danger",
        }
    }
}

/// Aggregate stock status: the total across all warehouses plus its level.
/// Always recomputed from the current stocks, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockStatus {
    pub total_stock: i64,
    pub level: StockLevel,
}

/// Sort key for the product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Quantity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Quantity => "quantity",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            "quantity" => Ok(SortKey::Quantity),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

/// Sort order. Descending is produced by reversing the ascending result,
/// not by flipping the comparator (tie order inverts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Direction of a stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentAction {
    Add,
    Remove,
}

impl AdjustmentAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentAction::Add => "add",
            AdjustmentAction::Remove => "remove",
        }
    }
}

impl std::str::FromStr for AdjustmentAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(AdjustmentAction::Add),
            "remove" => Ok(AdjustmentAction::Remove),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}
