use async_trait::async_trait;
use orderflow_core::repository::OrderRepository;
use orderflow_core::{Order, OrderStatus, Priority};
use std::path::Path;
use tokio::sync::RwLock;
use tracing::info;
use crate::StoreError;

/// Order store held in process memory, in insertion order
#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders: RwLock::new(orders) }
    }

    /// Load orders from a JSON array; `status` and `priority` default to `new` and `low`
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let path_display = path.display().to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| StoreError::SeedIo { path: path_display.clone(), source })?;
        let orders: Vec<Order> = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::SeedFormat { path: path_display.clone(), source })?;

        info!("Seeded {} orders from {}", orders.len(), path_display);
        Ok(Self::new(orders))
    }

    pub async fn insert(&self, order: Order) {
        self.orders.write().await.push(order);
    }

    pub async fn get_order(&self, order_id: i64) -> Option<Order> {
        self.orders.read().await.iter().find(|o| o.id == order_id).cloned()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn get_orders_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().filter(|o| o.user_id == user_id).cloned().collect())
    }

    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut orders = self.orders.write().await;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or(StoreError::OrderNotFound(order_id))?;

        order.status = status;
        order.priority = priority;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_filters_by_user() {
        let repo = InMemoryOrderRepository::new(vec![
            Order::new(1, "A", 10.0, false, 1),
            Order::new(2, "B", 20.0, false, 2),
            Order::new(3, "C", 30.0, true, 1),
        ]);

        let orders = repo.get_orders_by_user(1).await.unwrap();
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(repo.get_orders_by_user(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = InMemoryOrderRepository::default();
        repo.insert(Order::new(1, "C", 300.0, true, 1)).await;

        repo.update_order_status(1, OrderStatus::Completed, Priority::High).await.unwrap();

        let stored = repo.get_order(1).await.unwrap();
        assert_eq!(stored.status, OrderStatus::Completed);
        assert_eq!(stored.priority, Priority::High);
    }

    #[tokio::test]
    async fn test_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "type": "A", "amount": 120.5, "flag": false, "user_id": 7},
                {"id": 2, "type": "C", "amount": 250, "flag": true, "user_id": 7, "status": "completed", "priority": "high"}
            ]"#,
        )
        .unwrap();

        let repo = InMemoryOrderRepository::from_seed_file(&path).await.unwrap();
        let orders = repo.get_orders_by_user(7).await.unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0], Order::new(1, "A", 120.5, false, 7));
        assert_eq!(orders[1].status, OrderStatus::Completed);
        assert_eq!(orders[1].priority, Priority::High);
    }

    #[tokio::test]
    async fn test_shipped_seed_file_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../config/seed_orders.json");
        let repo = InMemoryOrderRepository::from_seed_file(path).await.unwrap();
        assert!(!repo.get_orders_by_user(123).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = InMemoryOrderRepository::from_seed_file(dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(StoreError::SeedIo { .. })));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"[{"id": 1, "type": "A"}]"#).unwrap();
        let bad = InMemoryOrderRepository::from_seed_file(&path).await;
        assert!(matches!(bad, Err(StoreError::SeedFormat { .. })));
    }

    #[tokio::test]
    async fn test_update_missing_order() {
        let repo = InMemoryOrderRepository::default();
        let err = repo
            .update_order_status(404, OrderStatus::Exported, Priority::Low)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Order not found: 404");
    }
}
