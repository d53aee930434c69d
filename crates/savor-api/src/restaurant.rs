// Restaurant profile endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{RestaurantPayload, RestaurantRecord};

impl ApiClient {
    /// Fetch a restaurant's profile.
    ///
    /// `GET api/restaurants/{restaurant_id}`
    pub async fn get_restaurant(&self, restaurant_id: &str) -> Result<RestaurantRecord, Error> {
        let url = self.api_url(&format!("restaurants/{restaurant_id}"))?;
        debug!("fetching restaurant profile");
        self.get(url).await
    }

    /// Update a restaurant's profile. Only the fields present in the
    /// payload change.
    ///
    /// `PUT api/restaurants/{restaurant_id}`
    pub async fn update_restaurant(
        &self,
        restaurant_id: &str,
        payload: &RestaurantPayload,
    ) -> Result<RestaurantRecord, Error> {
        let url = self.api_url(&format!("restaurants/{restaurant_id}"))?;
        debug!("updating restaurant profile");
        self.put(url, payload).await
    }
}
