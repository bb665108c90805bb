use orderflow_core::Order;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::handler::{ProcessError, ProcessOutcome};
use crate::selector::HandlerSelector;

/// All-or-nothing result of processing a user's orders
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// Every order was processed; orders carry their final status and priority
    Completed(Vec<Order>),
    /// Something aborted the batch; no partial results are reported
    Failed,
}

impl BatchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, BatchOutcome::Failed)
    }

    pub fn into_orders(self) -> Option<Vec<Order>> {
        match self {
            BatchOutcome::Completed(orders) => Some(orders),
            BatchOutcome::Failed => None,
        }
    }
}

/// Processes every order of a user, one at a time, in fetch order
pub struct OrderProcessor {
    selector: Arc<HandlerSelector>,
}

impl OrderProcessor {
    pub fn new(selector: Arc<HandlerSelector>) -> Self {
        Self { selector }
    }

    pub async fn process_orders(&self, user_id: i64) -> BatchOutcome {
        match self.run_batch(user_id).await {
            Ok(orders) => BatchOutcome::Completed(orders),
            Err(e) => {
                warn!("Order batch for user {} aborted: {}", user_id, e);
                BatchOutcome::Failed
            }
        }
    }

    async fn run_batch(&self, user_id: i64) -> Result<Vec<Order>, ProcessError> {
        let mut orders = self
            .selector
            .repository()
            .get_orders_by_user(user_id)
            .await
            .map_err(|source| ProcessError::Fetch { user_id, source })?;

        info!("Processing {} orders for user {}", orders.len(), user_id);

        let mut recovered = 0;
        for order in orders.iter_mut() {
            let handler = self.selector.select(&order.order_type)?;
            debug!("Dispatching order {} to type {} handler", order.id, handler.kind());

            let outcome = handler.process(order).await?;
            if let ProcessOutcome::Recovered { reason } = outcome {
                debug!("Order {} recorded as {} after: {}", order.id, order.status, reason);
                recovered += 1;
            }
        }

        info!(
            "Finished {} orders for user {} ({} after collaborator failures)",
            orders.len(),
            user_id,
            recovered
        );
        Ok(orders)
    }
}
