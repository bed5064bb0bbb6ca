//! Create-product flow
//!
//! Validates the string-typed form, resolves stock rows against the
//! injected warehouse directory, and posts the formatted payload.

use shared::models::{Product, WarehouseDirectory};
use shared::validation::{format_product, validate_form, ProductForm, ProductFormErrors};

use crate::api::ApiClient;
use crate::error::{AppError, AppResult};

/// Product form service
#[derive(Clone)]
pub struct ProductFormService {
    api: ApiClient,
    warehouses: WarehouseDirectory,
}

impl ProductFormService {
    pub fn new(api: ApiClient, warehouses: WarehouseDirectory) -> Self {
        Self { api, warehouses }
    }

    /// Per-field validation for inline display.
    pub fn validate(&self, form: &ProductForm) -> ProductFormErrors {
        validate_form(form)
    }

    /// Validate, format, and create. The first field error blocks the
    /// submission.
    pub async fn create_product(&self, form: &ProductForm) -> AppResult<Product> {
        if let Some((field, message)) = self.validate(form).into_iter().next() {
            return Err(AppError::Validation { field, message });
        }

        let payload = format_product(form, &self.warehouses)?;
        tracing::debug!(name = %payload.name, barcode = %payload.barcode, "Creating product");
        self.api.create_product(&payload).await
    }

    pub fn warehouses(&self) -> &WarehouseDirectory {
        &self.warehouses
    }
}
