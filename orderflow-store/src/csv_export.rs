use async_trait::async_trait;
use orderflow_core::{ExportSink, Order};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

const HEADER: &str = "ID,Type,Amount,Flag,Status,Priority";
/// Orders above this amount get an annotation row
const HIGH_VALUE_AMOUNT: f64 = 150.0;

/// Writes each exported order to its own CSV file
pub struct CsvExportSink {
    directory: PathBuf,
}

impl CsvExportSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Format: orders_type_{type}_{user}_{order id}_{unix millis}.csv
    fn file_name(order: &Order, millis: i64) -> String {
        format!(
            "orders_type_{}_{}_{}_{}.csv",
            order.order_type, order.user_id, order.id, millis
        )
    }

    /// Never overwrites: an existing file with the same name is an error
    async fn write_file(
        &self,
        order: &Order,
        millis: i64,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = self.directory.join(Self::file_name(order, millis));
        debug!("Exporting order {} to {}", order.id, path.display());

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(Self::render(order).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    fn render(order: &Order) -> String {
        let mut content = format!(
            "{}\n{},{},{},{},{},{}\n",
            HEADER,
            order.id,
            order.order_type,
            order.amount,
            order.flag,
            order.status,
            order.priority
        );

        if order.amount > HIGH_VALUE_AMOUNT {
            content.push_str(",,,,Note,High value order\n");
        }
        content
    }
}

#[async_trait]
impl ExportSink for CsvExportSink {
    async fn write_order(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.write_file(order, chrono::Utc::now().timestamp_millis()).await
    }
}
