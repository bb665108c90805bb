use async_trait::async_trait;
use orderflow_core::{Order, OrderRepository};
use crate::selector::{OrderKind, SelectionError};

/// Result of a handler run that did not abort the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Order was updated and persisted
    Updated,
    /// A collaborator failed, the failure was mapped onto the order status and persisted
    Recovered { reason: String },
}

/// Applies the business rule for one order type
#[async_trait]
pub trait OrderHandler: Send + Sync {
    fn kind(&self) -> OrderKind;

    /// Set status then priority on the order and persist both
    async fn process(&self, order: &mut Order) -> Result<ProcessOutcome, ProcessError>;
}

/// Errors that abort a batch
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Failed to fetch orders for user {user_id}: {source}")]
    Fetch {
        user_id: i64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to persist order {order_id}: {source}")]
    Persistence {
        order_id: i64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Write the order's current status and priority back to the store
pub(crate) async fn persist(
    repository: &dyn OrderRepository,
    order: &Order,
) -> Result<(), ProcessError> {
    repository
        .update_order_status(order.id, order.status, order.priority)
        .await
        .map_err(|source| ProcessError::Persistence {
            order_id: order.id,
            source,
        })
}
