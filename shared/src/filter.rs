//! Client-side product filtering, sorting, and free-text search

use crate::models::Product;
use crate::types::{SortKey, SortOrder};

/// Filter spec from the filter modal. Text fields are substring matches;
/// empty fields are ignored. All supplied filters AND together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub name: String,
    pub type_: String,
    /// Matched against the raw price's string representation as a literal
    /// substring, not a numeric range.
    pub price: String,
    pub supplier: String,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl ProductFilter {
    /// Produce a filtered, sorted copy of the product list.
    ///
    /// Sorting is always stable ascending on the selected key; descending
    /// order reverses the ascending result in place. Reversal, not a flipped
    /// comparator: the relative order of equal-key elements inverts.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut filtered: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort_by {
            SortKey::Name => {
                filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortKey::Price => {
                filtered.sort_by(|a, b| a.displayed_price().cmp(&b.displayed_price()));
            }
            SortKey::Quantity => {
                filtered.sort_by(|a, b| a.total_quantity().cmp(&b.total_quantity()));
            }
        }

        if self.sort_order == SortOrder::Desc {
            filtered.reverse();
        }

        filtered
    }

    fn matches(&self, product: &Product) -> bool {
        if !self.name.is_empty()
            && !product
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase())
        {
            return false;
        }
        if !self.type_.is_empty()
            && !product
                .type_
                .to_lowercase()
                .contains(&self.type_.to_lowercase())
        {
            return false;
        }
        if !self.price.is_empty() && !product.price.to_string().contains(&self.price) {
            return false;
        }
        if !self.supplier.is_empty()
            && !product
                .supplier
                .to_lowercase()
                .contains(&self.supplier.to_lowercase())
        {
            return false;
        }
        true
    }
}

/// Free-text search across name, type, price string, and supplier.
/// OR semantics: a product matches when any field contains the query.
pub fn search(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.type_.to_lowercase().contains(&needle)
                || p.price.to_string().contains(query)
                || p.supplier.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
