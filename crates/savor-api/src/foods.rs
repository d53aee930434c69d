// Menu item (food) endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{FoodPayload, FoodRecord};

impl ApiClient {
    /// List a restaurant's menu items.
    ///
    /// `GET api/foods/restaurant/{restaurant_id}`
    pub async fn list_foods(&self, restaurant_id: &str) -> Result<Vec<FoodRecord>, Error> {
        let url = self.api_url(&format!("foods/restaurant/{restaurant_id}"))?;
        debug!("listing foods");
        self.get(url).await
    }

    /// Create a menu item.
    ///
    /// `POST api/foods`
    pub async fn create_food(&self, payload: &FoodPayload) -> Result<FoodRecord, Error> {
        let url = self.api_url("foods")?;
        debug!("creating food");
        self.post(url, payload).await
    }

    /// Update a menu item. Only the fields present in the payload change.
    ///
    /// `PUT api/foods/{id}`
    pub async fn update_food(&self, id: &str, payload: &FoodPayload) -> Result<FoodRecord, Error> {
        let url = self.api_url(&format!("foods/{id}"))?;
        debug!(%id, "updating food");
        self.put(url, payload).await
    }

    /// Delete a menu item by id.
    ///
    /// `DELETE api/foods/{id}`
    pub async fn delete_food(&self, id: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("foods/{id}"))?;
        debug!(%id, "deleting food");
        self.delete(url).await
    }
}
