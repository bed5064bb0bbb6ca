//! Wire models for the remote inventory backend

pub mod product;
pub mod statistics;
pub mod warehouse;
pub mod warehouseman;

pub use product::{EditRecord, Localisation, NewProduct, Product, Stock};
pub use statistics::{CityStocks, RankedProduct, Statistics};
pub use warehouse::{Warehouse, WarehouseDirectory};
pub use warehouseman::Warehouseman;
