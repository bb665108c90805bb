pub mod models;
pub mod repository;
pub mod classification;
pub mod export;

pub use models::{Order, OrderStatus, Priority};
pub use repository::OrderRepository;
pub use classification::{ClassificationClient, ClassificationError, ClassificationResponse};
pub use export::ExportSink;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
}
