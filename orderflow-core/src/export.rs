use async_trait::async_trait;
use crate::models::Order;

#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Durably record a single order
    async fn write_order(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
