use async_trait::async_trait;
use crate::models::{Order, OrderStatus, Priority};

/// Repository trait for order data access
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch every order belonging to a user, in store order
    async fn get_orders_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>>;

    /// Persist the outcome of processing an order
    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
