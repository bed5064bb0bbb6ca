//! Stockroom client: a presentation layer over the remote inventory
//! backend (products / warehousemans REST endpoints).
//!
//! The crate wraps the backend in an [`api::ApiClient`], persists the
//! authenticated session on disk, and exposes the catalog, product-detail,
//! statistics, scanner, and product-form flows as services. Domain logic
//! lives in the `shared` crate.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{AppError, AppResult};
