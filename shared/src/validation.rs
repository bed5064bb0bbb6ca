//! Product-form validation and payload formatting
//!
//! Field errors are accumulated per field and surfaced inline next to the
//! offending input; messages are kept in French as shipped.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NewProduct, Stock, WarehouseDirectory};

/// Product categories offered by the create-product form.
pub const PRODUCT_TYPES: &[&str] = &["Informatique", "Accessoires", "Électronique", "Autre"];

/// One stock row of the create-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub warehouse_id: Option<i64>,
    pub quantity: String,
}

/// Create-product form state. All fields are string-typed until formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub barcode: String,
    pub price: String,
    pub solde: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub supplier: String,
    pub image: String,
    pub stocks: Vec<StockRow>,
}

/// Per-field validation errors, keyed by field name (stock rows use
/// `stock-{index}`). Empty map means the form is valid.
pub type ProductFormErrors = BTreeMap<String, String>;

/// Failures while turning a valid form into a creation payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown warehouse id {0}")]
    UnknownWarehouse(i64),
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Validate the form. Required: name, barcode, price, supplier. A stock row
/// with a quantity but no selected warehouse is an error; price and solde
/// must parse as decimals when present.
pub fn validate_form(form: &ProductForm) -> ProductFormErrors {
    let mut errors = ProductFormErrors::new();

    if form.name.is_empty() {
        errors.insert("name".to_string(), "Le nom est requis".to_string());
    }
    if form.barcode.is_empty() {
        errors.insert("barcode".to_string(), "Le code-barres est requis".to_string());
    }
    if form.price.is_empty() {
        errors.insert("price".to_string(), "Le prix est requis".to_string());
    } else if form.price.trim().parse::<Decimal>().is_err() {
        errors.insert("price".to_string(), "Le prix est invalide".to_string());
    }
    if !form.solde.is_empty() && form.solde.trim().parse::<Decimal>().is_err() {
        errors.insert("solde".to_string(), "Le solde est invalide".to_string());
    }
    if form.supplier.is_empty() {
        errors.insert("supplier".to_string(), "Le fournisseur est requis".to_string());
    }

    for (index, row) in form.stocks.iter().enumerate() {
        if !row.quantity.is_empty() && row.warehouse_id.is_none() {
            errors.insert(
                format!("stock-{}", index),
                "Sélectionnez un entrepôt".to_string(),
            );
        }
    }

    errors
}

/// Turn a validated form into a creation payload: rows with both a
/// warehouse and a quantity are resolved against the injected warehouse
/// directory; price and solde are coerced to decimals; the edit history
/// starts empty.
pub fn format_product(
    form: &ProductForm,
    warehouses: &WarehouseDirectory,
) -> Result<NewProduct, FormatError> {
    let price: Decimal = form
        .price
        .trim()
        .parse()
        .map_err(|_| FormatError::InvalidPrice(form.price.clone()))?;

    let solde: Option<Decimal> = if form.solde.is_empty() {
        None
    } else {
        Some(
            form.solde
                .trim()
                .parse()
                .map_err(|_| FormatError::InvalidPrice(form.solde.clone()))?,
        )
    };

    let mut stocks = Vec::new();
    for row in &form.stocks {
        let Some(warehouse_id) = row.warehouse_id else {
            continue;
        };
        if row.quantity.is_empty() {
            continue;
        }
        let warehouse = warehouses
            .resolve(warehouse_id)
            .ok_or(FormatError::UnknownWarehouse(warehouse_id))?;
        let quantity: i64 = row
            .quantity
            .trim()
            .parse()
            .map_err(|_| FormatError::InvalidQuantity(row.quantity.clone()))?;
        stocks.push(Stock {
            id: warehouse.id,
            name: warehouse.name.clone(),
            quantity,
            localisation: warehouse.localisation.clone(),
        });
    }

    Ok(NewProduct {
        name: form.name.clone(),
        type_: form.type_.clone(),
        barcode: form.barcode.clone(),
        price,
        solde,
        supplier: form.supplier.clone(),
        image: form.image.clone(),
        stocks,
        edited_by: Vec::new(),
    })
}
