//! HTTP client for the remote inventory backend
//!
//! Wraps reqwest with a fixed base URL and JSON headers. Non-2xx responses
//! are logged with a status-specific message and returned as errors; nothing
//! is retried.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use shared::models::{NewProduct, Product, Stock, Warehouseman};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Inventory backend client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient from the loaded configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new ApiClient with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full product list
    pub async fn get_products(&self) -> AppResult<Vec<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self.send_get(&url).await?;
        self.parse_response(response, "Products").await
    }

    /// Fetch a single product by id
    pub async fn get_product(&self, id: i64) -> AppResult<Product> {
        let url = format!("{}/products/{}", self.base_url, id);
        let response = self.send_get(&url).await?;
        self.parse_response(response, "Product").await
    }

    /// Look up a product by exact barcode. Zero or one match is expected;
    /// a miss is a normal outcome, not an error.
    pub async fn find_by_barcode(&self, barcode: &str) -> AppResult<Option<Product>> {
        let url = format!("{}/products", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("barcode", barcode)])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("API request failed: {}", e)))?;
        let matches: Vec<Product> = self.parse_response(response, "Products").await?;
        Ok(matches.into_iter().next())
    }

    /// Fetch warehouseman records matching a secret key
    pub async fn get_warehousemen(&self, secret_key: &str) -> AppResult<Vec<Warehouseman>> {
        let url = format!("{}/warehousemans", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("secretKey", secret_key)])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("API request failed: {}", e)))?;
        self.parse_response(response, "Warehousemans").await
    }

    /// Create a product
    pub async fn create_product(&self, product: &NewProduct) -> AppResult<Product> {
        let url = format!("{}/products", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(product)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("API request failed: {}", e)))?;
        self.parse_response(response, "Product").await
    }

    /// Overwrite a product's stocks array via partial update. Returns the
    /// server's resulting product state; the server is the source of truth
    /// post-write.
    pub async fn patch_stocks(&self, product_id: i64, stocks: &[Stock]) -> AppResult<Product> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let response = self
            .client
            .patch(&url)
            .json(&serde_json::json!({ "stocks": stocks }))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("API request failed: {}", e)))?;
        self.parse_response(response, "Product").await
    }

    async fn send_get(&self, url: &str) -> AppResult<Response> {
        self.client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("API request failed: {}", e)))
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        response: Response,
        resource: &str,
    ) -> AppResult<T> {
        let status = response.status();
        if !status.is_success() {
            Self::log_status(status);
            if status == StatusCode::NOT_FOUND {
                return Err(AppError::NotFound(resource.to_string()));
            }
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse {} response: {}", resource, e)))
    }

    fn log_status(status: StatusCode) {
        match status.as_u16() {
            401 => tracing::error!("Unauthorized access"),
            404 => tracing::error!("API endpoint not found"),
            500 => tracing::error!("Server error"),
            code => tracing::error!("API request failed with status {}", code),
        }
    }
}
