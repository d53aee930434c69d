// Dashboard and revenue reporting endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{DashboardRecord, RevenuePointRecord};

impl ApiClient {
    /// Fetch the aggregate dashboard metrics for a restaurant.
    ///
    /// `GET api/dashboard/{restaurant_id}`
    pub async fn dashboard_stats(&self, restaurant_id: &str) -> Result<DashboardRecord, Error> {
        let url = self.api_url(&format!("dashboard/{restaurant_id}"))?;
        debug!("fetching dashboard stats");
        self.get(url).await
    }

    /// Fetch the bucketed revenue report for a restaurant.
    ///
    /// `GET api/revenue/{restaurant_id}?period={daily|weekly|monthly|yearly}`
    pub async fn revenue(
        &self,
        restaurant_id: &str,
        period: &str,
    ) -> Result<Vec<RevenuePointRecord>, Error> {
        let mut url = self.api_url(&format!("revenue/{restaurant_id}"))?;
        url.query_pairs_mut().append_pair("period", period);
        debug!(%period, "fetching revenue report");
        self.get(url).await
    }
}
