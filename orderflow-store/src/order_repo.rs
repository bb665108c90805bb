use async_trait::async_trait;
use sqlx::PgPool;
use orderflow_core::repository::OrderRepository;
use orderflow_core::{Order, OrderStatus, Priority};
use crate::StoreError;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    order_type: String,
    amount: f64,
    flag: bool,
    status: String,
    priority: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<OrderStatus>()
            .map_err(|e| StoreError::CorruptRow { id: row.id, reason: e.to_string() })?;
        let priority = row.priority.parse::<Priority>()
            .map_err(|e| StoreError::CorruptRow { id: row.id, reason: e.to_string() })?;

        Ok(Order {
            id: row.id,
            order_type: row.order_type,
            amount: row.amount,
            flag: row.flag,
            status,
            priority,
            user_id: row.user_id,
        })
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn get_orders_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, order_type, amount, flag, status, priority
            FROM orders
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            orders.push(Order::try_from(row)?);
        }
        Ok(orders)
    }

    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = sqlx::query(
            "UPDATE orders SET status = $1, priority = $2, updated_at = NOW() WHERE id = $3",
        )
        .bind(status.as_str())
        .bind(priority.as_str())
        .bind(order_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::OrderNotFound(order_id).into());
        }
        Ok(())
    }
}
