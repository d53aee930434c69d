// Voucher endpoints
//
// Vouchers are owned by a single restaurant: listing is keyed by the
// restaurant id, update/delete by the voucher id. Create and update expect
// a fully validated payload -- the backend re-checks, but the console
// validates client-side first (see savor-core's rules module).

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{VoucherPayload, VoucherRecord};

impl ApiClient {
    /// List all vouchers owned by a restaurant.
    ///
    /// `GET api/vouchers/restaurant/{restaurant_id}`
    pub async fn list_vouchers(&self, restaurant_id: &str) -> Result<Vec<VoucherRecord>, Error> {
        let url = self.api_url(&format!("vouchers/restaurant/{restaurant_id}"))?;
        debug!("listing vouchers");
        self.get(url).await
    }

    /// Create a voucher.
    ///
    /// `POST api/vouchers`
    pub async fn create_voucher(&self, payload: &VoucherPayload) -> Result<VoucherRecord, Error> {
        let url = self.api_url("vouchers")?;
        debug!(code = %payload.code, "creating voucher");
        self.post(url, payload).await
    }

    /// Replace a voucher's configuration.
    ///
    /// `PUT api/vouchers/{id}`
    pub async fn update_voucher(
        &self,
        id: &str,
        payload: &VoucherPayload,
    ) -> Result<VoucherRecord, Error> {
        let url = self.api_url(&format!("vouchers/{id}"))?;
        debug!(%id, "updating voucher");
        self.put(url, payload).await
    }

    /// Delete a voucher by id.
    ///
    /// `DELETE api/vouchers/{id}`
    pub async fn delete_voucher(&self, id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("vouchers/{id}"))?;
        debug!(%id, "deleting voucher");
        self.delete(url).await
    }
}
