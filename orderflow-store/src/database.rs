use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;
use crate::order_repo::PgOrderRepository;

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Postgres connection pool shared by the order repository
#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(connection_string: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(connection_string)
            .await?;

        info!("Connected to order database (pool size {})", MAX_CONNECTIONS);
        Ok(Self { pool })
    }

    /// Create or upgrade the `orders` table
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running order schema migrations...");
        sqlx::migrate!("../migrations").run(&self.pool).await?;
        info!("Order schema is up to date.");
        Ok(())
    }

    pub fn order_repository(&self) -> PgOrderRepository {
        PgOrderRepository::new(self.pool.clone())
    }
}
