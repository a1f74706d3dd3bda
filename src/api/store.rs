use std::collections::HashMap;

use crate::ApiClient;
use crate::api::error::Error;
use crate::api::http_sender::HttpSender;
use crate::models::Order;

/// Operations on the `/store` endpoint group.
#[async_trait::async_trait]
pub trait StoreApi {
    async fn get_inventory(&self) -> Result<HashMap<String, i32>, Error>;
    async fn place_order(&self, order: &Order) -> Result<Order, Error>;
    async fn get_order_by_id(&self, order_id: i64) -> Result<Order, Error>;
    async fn delete_order(&self, order_id: i64) -> Result<(), Error>;
}

#[async_trait::async_trait]
impl<S: HttpSender> StoreApi for ApiClient<S> {
    async fn get_inventory(&self) -> Result<HashMap<String, i32>, Error> {
        let response = self.send_get("/store/inventory", &[]).await?;

        let inventory = response
            .json::<HashMap<String, i32>>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(inventory)
    }

    async fn place_order(&self, order: &Order) -> Result<Order, Error> {
        let response = self.send_post_json("/store/order", order).await?;

        let placed = response
            .json::<Order>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(placed)
    }

    async fn get_order_by_id(&self, order_id: i64) -> Result<Order, Error> {
        let response = self
            .send_get(&format!("/store/order/{}", order_id), &[])
            .await?;

        let order = response
            .json::<Order>()
            .await
            .map_err(|e| Error::Deserialization(Box::new(e)))?;
        Ok(order)
    }

    async fn delete_order(&self, order_id: i64) -> Result<(), Error> {
        _ = self
            .send_delete(&format!("/store/order/{}", order_id), &[])
            .await?;

        Ok(())
    }
}
