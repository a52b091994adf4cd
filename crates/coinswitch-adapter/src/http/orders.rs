/*
[INPUT]:  Order payloads and order ids
[OUTPUT]: Created orders, order lifecycle records, order history
[POS]:    HTTP layer - order endpoints
[UPDATE]: When adding new order endpoints or changing the order payload
*/

use crate::http::{CoinswitchClient, Result};
use crate::types::{AllOrders, CreateOrderRequest, Order, OrderStatus};

impl CoinswitchClient {
    /// Create an order spending one coin to purchase another
    ///
    /// POST /order
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order> {
        request.validate()?;
        self.post(&["order"], request).await
    }

    /// Status of a single order
    ///
    /// GET /order/{order_id}
    pub async fn get_order_status(&self, order_id: &str) -> Result<OrderStatus> {
        self.get(&["order", order_id]).await
    }

    /// Every order created with this API key
    ///
    /// GET /orders
    pub async fn list_all_orders(&self) -> Result<AllOrders> {
        self.get(&["orders"]).await
    }
}
