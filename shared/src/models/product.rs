//! Product catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Geographic location of a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localisation {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Per-warehouse stock entry, owned by its parent product.
///
/// `id` matches a warehouse id; `name` is the warehouse name, denormalized.
/// Quantity is expected non-negative but the backend does not enforce it
/// (a remove adjustment may drive it below zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub localisation: Localisation,
}

/// One entry of a product's edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRecord {
    pub warehouseman_id: i64,
    pub at: DateTime<Utc>,
}

/// A catalog product with its per-warehouse stocks and edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub barcode: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solde: Option<Decimal>,
    pub supplier: String,
    pub image: String,
    pub stocks: Vec<Stock>,
    #[serde(default)]
    pub edited_by: Vec<EditRecord>,
}

impl Product {
    /// Price shown to the user: the discount (`solde`) when it is present
    /// and lower than the base price, otherwise the base price.
    pub fn displayed_price(&self) -> Decimal {
        match self.solde {
            Some(solde) if solde < self.price => solde,
            _ => self.price,
        }
    }

    /// Total quantity across all warehouses.
    pub fn total_quantity(&self) -> i64 {
        self.stocks.iter().map(|s| s.quantity).sum()
    }

    /// Most recent edit timestamp, `None` when the product was never edited.
    pub fn latest_edit(&self) -> Option<DateTime<Utc>> {
        self.edited_by.iter().map(|e| e.at).max()
    }
}

/// Creation payload for `POST /products`. The backend assigns the id;
/// the edit history starts empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub barcode: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solde: Option<Decimal>,
    pub supplier: String,
    pub image: String,
    pub stocks: Vec<Stock>,
    pub edited_by: Vec<EditRecord>,
}
