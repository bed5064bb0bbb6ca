//! Statistics aggregation over the full product list
//!
//! Everything here is a full recomputation: no caching layer, no
//! incremental maintenance on stock mutation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{CityStocks, Product, RankedProduct, Statistics};

/// Number of entries kept in each ranking.
const RANKING_SIZE: usize = 5;

/// Compute dashboard statistics from the full product list.
pub fn compute_statistics(products: &[Product]) -> Statistics {
    // Distinct cities in first-seen order, so the per-city rollup is stable.
    let mut cities: Vec<String> = Vec::new();
    for product in products {
        for stock in &product.stocks {
            if !cities.contains(&stock.localisation.city) {
                cities.push(stock.localisation.city.clone());
            }
        }
    }

    let out_of_stock = products
        .iter()
        .filter(|p| p.stocks.is_empty() || p.total_quantity() == 0)
        .count() as i64;

    let total_stock_value: Decimal = products
        .iter()
        .map(|p| p.displayed_price() * Decimal::from(p.total_quantity()))
        .sum();

    let stocks_by_city = cities
        .iter()
        .map(|city| {
            let mut total_products = 0;
            let mut total_quantity = 0;
            for product in products {
                let city_quantity: i64 = product
                    .stocks
                    .iter()
                    .filter(|s| &s.localisation.city == city)
                    .map(|s| s.quantity)
                    .sum();
                let holds_stock_here = product
                    .stocks
                    .iter()
                    .any(|s| &s.localisation.city == city);
                if holds_stock_here {
                    total_products += 1;
                    total_quantity += city_quantity;
                }
            }
            CityStocks {
                city: city.clone(),
                total_products,
                total_quantity,
            }
        })
        .collect();

    // Rank by most recent edit, newest first. Products without history
    // rank last (epoch).
    let mut ranked: Vec<(DateTime<Utc>, RankedProduct)> = products
        .iter()
        .map(|p| {
            let last_edit = p.latest_edit().unwrap_or(DateTime::UNIX_EPOCH);
            (
                last_edit,
                RankedProduct {
                    product_id: p.id,
                    product_name: p.name.clone(),
                    quantity: p.total_quantity(),
                },
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let most_added_products: Vec<RankedProduct> = ranked
        .iter()
        .take(RANKING_SIZE)
        .map(|(_, r)| r.clone())
        .collect();

    let most_removed_products: Vec<RankedProduct> = ranked
        .iter()
        .filter(|(_, r)| r.quantity == 0)
        .take(RANKING_SIZE)
        .map(|(_, r)| r.clone())
        .collect();

    Statistics {
        total_products: products.len() as i64,
        total_cities: cities.len() as i64,
        out_of_stock,
        total_stock_value,
        most_added_products,
        most_removed_products,
        stocks_by_city,
    }
}
