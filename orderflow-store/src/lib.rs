pub mod app_config;
pub mod database;
pub mod order_repo;
pub mod memory_repo;
pub mod csv_export;
pub mod classification_client;

pub use database::DbClient;
pub use order_repo::PgOrderRepository;
pub use memory_repo::InMemoryOrderRepository;
pub use csv_export::CsvExportSink;
pub use classification_client::HttpClassificationClient;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    OrderNotFound(i64),
    #[error("Corrupt order row {id}: {reason}")]
    CorruptRow { id: i64, reason: String },
    #[error("Failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed file {path}: {source}")]
    SeedFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
