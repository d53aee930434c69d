// Review endpoints (read-only)

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::ReviewRecord;

impl ApiClient {
    /// List customer reviews for a restaurant, newest first.
    ///
    /// `GET api/reviews/restaurant/{restaurant_id}`
    pub async fn list_reviews(&self, restaurant_id: &str) -> Result<Vec<ReviewRecord>, Error> {
        let url = self.api_url(&format!("reviews/restaurant/{restaurant_id}"))?;
        debug!("listing reviews");
        self.get(url).await
    }
}
