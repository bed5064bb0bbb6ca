//! Dashboard statistics

use shared::models::Statistics;
use shared::statistics::compute_statistics;

use crate::api::ApiClient;
use crate::error::AppResult;

/// Statistics service. Pulls the full product list and recomputes every
/// aggregate from scratch on each call; nothing is cached across stock
/// mutations.
#[derive(Clone)]
pub struct StatisticsService {
    api: ApiClient,
}

impl StatisticsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch_statistics(&self) -> AppResult<Statistics> {
        let products = self.api.get_products().await?;
        tracing::debug!(products = products.len(), "Computing statistics");
        Ok(compute_statistics(&products))
    }
}
