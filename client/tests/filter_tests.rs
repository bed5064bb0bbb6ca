//! Catalog filter, sort, and search tests
//!
//! Tests for the product list including:
//! - Conjunctive field filtering (every non-empty criterion must match)
//! - Stable sorting and descending as reversed ascending
//! - Disjunctive free-text search

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use shared::filter::{search, ProductFilter};
use shared::models::{Localisation, Product, Stock};
use shared::types::{SortKey, SortOrder};

// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn stock(id: i64, city: &str, quantity: i64) -> Stock {
    Stock {
        id,
        name: format!("Warehouse {}", id),
        quantity,
        localisation: Localisation {
            city: city.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        },
    }
}

fn product(id: i64, name: &str, type_: &str, price: &str, supplier: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        type_: type_.to_string(),
        barcode: format!("{:013}", id),
        price: dec(price),
        solde: None,
        supplier: supplier.to_string(),
        image: String::new(),
        stocks: vec![stock(1999, "Marrakesh", 5)],
        edited_by: vec![],
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product(1, "Laptop Pro", "Informatique", "1200", "TechDistrib"),
        product(2, "USB Cable", "Accessoires", "12.5", "CableCo"),
        product(3, "laptop sleeve", "Accessoires", "25", "TechDistrib"),
        product(4, "Monitor", "Informatique", "300", "ScreenWorld"),
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// All criteria empty keeps every product
    #[test]
    fn test_empty_filter_keeps_all() {
        let filter = ProductFilter::default();
        assert_eq!(filter.apply(&catalog()).len(), 4);
    }

    /// Name match is a case-insensitive substring
    #[test]
    fn test_name_filter_case_insensitive() {
        let filter = ProductFilter {
            name: "LAPTOP".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&catalog());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.name.to_lowercase().contains("laptop")));
    }

    /// Multiple criteria are combined with AND
    #[test]
    fn test_filters_are_conjunctive() {
        let filter = ProductFilter {
            name: "laptop".to_string(),
            supplier: "techdistrib".to_string(),
            type_: "accessoires".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    /// Price criterion matches against the price's string form
    #[test]
    fn test_price_filter_is_substring_of_string_form() {
        let filter = ProductFilter {
            price: "12".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&catalog());
        // "1200" and "12.5" both contain "12"
        assert_eq!(result.len(), 2);
        assert!(result.iter().any(|p| p.id == 1));
        assert!(result.iter().any(|p| p.id == 2));
    }

    /// A criterion matching nothing yields an empty list
    #[test]
    fn test_filter_excluding_everything() {
        let filter = ProductFilter {
            supplier: "nobody".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&catalog()).is_empty());
    }

    /// Name sort compares lowercased names
    #[test]
    fn test_sort_by_name_ignores_case() {
        let filter = ProductFilter {
            sort_by: SortKey::Name,
            ..Default::default()
        };
        let names: Vec<String> = filter
            .apply(&catalog())
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            vec!["Laptop Pro", "laptop sleeve", "Monitor", "USB Cable"]
        );
    }

    /// Price sort uses the displayed price
    #[test]
    fn test_sort_by_price_uses_displayed_price() {
        let mut products = catalog();
        // A discount below the base price takes over as the sort key
        products[0].solde = Some(dec("10"));

        let filter = ProductFilter {
            sort_by: SortKey::Price,
            ..Default::default()
        };
        let ids: Vec<i64> = filter.apply(&products).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    /// Descending is the ascending order reversed, ties included
    #[test]
    fn test_descending_reverses_tie_order() {
        let mut products = catalog();
        for p in &mut products {
            p.price = dec("10");
        }

        let asc = ProductFilter {
            sort_by: SortKey::Price,
            sort_order: SortOrder::Asc,
            ..Default::default()
        };
        let desc = ProductFilter {
            sort_by: SortKey::Price,
            sort_order: SortOrder::Desc,
            ..Default::default()
        };

        let asc_ids: Vec<i64> = asc.apply(&products).into_iter().map(|p| p.id).collect();
        let mut expected = asc_ids.clone();
        expected.reverse();

        let desc_ids: Vec<i64> = desc.apply(&products).into_iter().map(|p| p.id).collect();
        // With all keys equal, descending inverts even the tie order
        assert_eq!(desc_ids, expected);
    }

    /// Search matches any field, not all
    #[test]
    fn test_search_is_disjunctive() {
        // "tech" hits suppliers, "monitor" hits a name
        let by_supplier = search(&catalog(), "techdistrib");
        assert_eq!(by_supplier.len(), 2);

        let by_name = search(&catalog(), "monitor");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 4);
    }

    /// Empty query keeps everything
    #[test]
    fn test_search_empty_query() {
        assert_eq!(search(&catalog(), "").len(), 4);
    }

    /// Search also matches the price string
    #[test]
    fn test_search_matches_price_string() {
        let result = search(&catalog(), "300");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 4);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for generating product names
    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,15}"
    }

    /// Strategy for generating suppliers
    fn supplier_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("TechDistrib"), Just("CableCo"), Just("ScreenWorld")]
    }

    /// Strategy for generating prices
    fn price_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=100000i64).prop_map(|n| Decimal::new(n, 2))
    }

    fn product_strategy() -> impl Strategy<Value = Product> {
        (1i64..10000, name_strategy(), supplier_strategy(), price_strategy()).prop_map(
            |(id, name, supplier, price)| {
                let mut p = product(id, &name, "Informatique", "1", supplier);
                p.price = price;
                p
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the filtered list is always a subset of the input
        #[test]
        fn prop_filter_result_is_subset(
            products in prop::collection::vec(product_strategy(), 0..20),
            name in "[a-z]{0,4}",
        ) {
            let filter = ProductFilter { name, ..Default::default() };
            let result = filter.apply(&products);

            prop_assert!(result.len() <= products.len());
            for p in &result {
                prop_assert!(products.iter().any(|q| q.id == p.id && q.name == p.name));
            }
        }

        /// Property: every survivor satisfies every non-empty criterion
        #[test]
        fn prop_survivors_match_all_criteria(
            products in prop::collection::vec(product_strategy(), 0..20),
            name in "[a-z]{1,3}",
            supplier in "[a-z]{1,3}",
        ) {
            let filter = ProductFilter {
                name: name.clone(),
                supplier: supplier.clone(),
                ..Default::default()
            };
            for p in filter.apply(&products) {
                prop_assert!(p.name.to_lowercase().contains(&name));
                prop_assert!(p.supplier.to_lowercase().contains(&supplier));
            }
        }

        /// Property: descending equals ascending reversed
        #[test]
        fn prop_desc_is_reversed_asc(
            products in prop::collection::vec(product_strategy(), 0..20),
        ) {
            let asc = ProductFilter {
                sort_by: SortKey::Price,
                sort_order: SortOrder::Asc,
                ..Default::default()
            };
            let desc = ProductFilter {
                sort_by: SortKey::Price,
                sort_order: SortOrder::Desc,
                ..Default::default()
            };

            let mut expected: Vec<i64> =
                asc.apply(&products).into_iter().map(|p| p.id).collect();
            expected.reverse();
            let actual: Vec<i64> =
                desc.apply(&products).into_iter().map(|p| p.id).collect();

            prop_assert_eq!(actual, expected);
        }

        /// Property: sorting never changes the set of products
        #[test]
        fn prop_sort_preserves_elements(
            products in prop::collection::vec(product_strategy(), 0..20),
        ) {
            let filter = ProductFilter {
                sort_by: SortKey::Name,
                ..Default::default()
            };
            let result = filter.apply(&products);
            prop_assert_eq!(result.len(), products.len());

            let mut before: Vec<i64> = products.iter().map(|p| p.id).collect();
            let mut after: Vec<i64> = result.iter().map(|p| p.id).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(after, before);
        }
    }
}
