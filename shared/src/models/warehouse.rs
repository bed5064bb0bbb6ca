//! Warehouse reference data

use serde::{Deserialize, Serialize};

use super::product::Localisation;

/// A physical warehouse. Static reference data used to resolve
/// human-readable names and locations when formatting stock entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub localisation: Localisation,
}

/// The set of known warehouses, injected from configuration rather than
/// hardcoded in form logic.
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseDirectory {
    warehouses: Vec<Warehouse>,
}

impl WarehouseDirectory {
    pub fn new(warehouses: Vec<Warehouse>) -> Self {
        Self { warehouses }
    }

    pub fn resolve(&self, id: i64) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == id)
    }

    pub fn all(&self) -> &[Warehouse] {
        &self.warehouses
    }
}

impl Default for WarehouseDirectory {
    /// The two warehouses the deployed backend knows about.
    fn default() -> Self {
        Self::new(vec![
            Warehouse {
                id: 1999,
                name: "Gueliz B2".to_string(),
                localisation: Localisation {
                    city: "Marrakesh".to_string(),
                    latitude: 31.628674,
                    longitude: -7.992047,
                },
            },
            Warehouse {
                id: 2991,
                name: "Lazari H2".to_string(),
                localisation: Localisation {
                    city: "Oujda".to_string(),
                    latitude: 34.689404,
                    longitude: -1.912823,
                },
            },
        ])
    }
}
