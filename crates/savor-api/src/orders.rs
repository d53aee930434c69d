// Order endpoints
//
// Orders are read-only except for the status transition endpoint; the
// console never creates or deletes orders.

use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::OrderRecord;

impl ApiClient {
    /// List a restaurant's orders, newest first.
    ///
    /// `GET api/orders/restaurant/{restaurant_id}`
    pub async fn list_orders(&self, restaurant_id: &str) -> Result<Vec<OrderRecord>, Error> {
        let url = self.api_url(&format!("orders/restaurant/{restaurant_id}"))?;
        debug!("listing orders");
        self.get(url).await
    }

    /// Advance an order to a new status.
    ///
    /// `PUT api/orders/{id}/status`
    pub async fn update_order_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<OrderRecord, Error> {
        let url = self.api_url(&format!("orders/{id}/status"))?;
        debug!(%id, %status, "updating order status");
        self.put(url, &json!({ "status": status })).await
    }
}
