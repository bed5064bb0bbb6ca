//! Shared domain types and logic for the Stockroom inventory client.
//!
//! Everything in this crate is pure: wire models for the remote backend,
//! product filtering and sorting, stock status and adjustment math,
//! statistics aggregation, and product-form validation. Network and
//! storage concerns live in the `client` crate.

pub mod filter;
pub mod models;
pub mod statistics;
pub mod stock;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
