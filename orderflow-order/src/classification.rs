use async_trait::async_trait;
use orderflow_core::{
    ClassificationClient, ClassificationError, ClassificationResponse, Order, OrderRepository,
    OrderStatus,
};
use std::sync::Arc;
use tracing::warn;

use crate::handler::{persist, OrderHandler, ProcessError, ProcessOutcome};
use crate::priority::PriorityRule;
use crate::selector::OrderKind;

/// Minimum verdict amount for an order to count as processed
const VERDICT_AMOUNT_THRESHOLD: f64 = 50.0;
/// Order amounts at or above this are never processed automatically
const ORDER_AMOUNT_CEILING: f64 = 100.0;

/// Type B: status follows the remote classification verdict
pub struct ClassificationHandler {
    repository: Arc<dyn OrderRepository>,
    client: Arc<dyn ClassificationClient>,
    priority_rule: PriorityRule,
}

impl ClassificationHandler {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        client: Arc<dyn ClassificationClient>,
        priority_rule: PriorityRule,
    ) -> Self {
        Self { repository, client, priority_rule }
    }

    /// Map a verdict onto a status. Branch order matters: an amount of 100 with a
    /// verdict of 50 and no flag falls through to `Error`.
    fn decide(order: &Order, response: &ClassificationResponse) -> OrderStatus {
        if !response.is_success() {
            return OrderStatus::ApiError;
        }

        match response.amount() {
            None => OrderStatus::Error,
            Some(verdict) if verdict >= VERDICT_AMOUNT_THRESHOLD && order.amount < ORDER_AMOUNT_CEILING => {
                OrderStatus::Processed
            }
            Some(verdict) if verdict < VERDICT_AMOUNT_THRESHOLD || order.flag => OrderStatus::Pending,
            Some(_) => OrderStatus::Error,
        }
    }
}

#[async_trait]
impl OrderHandler for ClassificationHandler {
    fn kind(&self) -> OrderKind {
        OrderKind::B
    }

    async fn process(&self, order: &mut Order) -> Result<ProcessOutcome, ProcessError> {
        let (status, outcome) = match self.client.classify(order.id).await {
            Ok(response) => (Self::decide(order, &response), ProcessOutcome::Updated),
            Err(ClassificationError::Api(reason)) => {
                warn!("Classification API failed for order {}: {}", order.id, reason);
                (OrderStatus::ApiFailure, ProcessOutcome::Recovered { reason })
            }
            Err(e @ ClassificationError::Unexpected(_)) => {
                warn!("Unexpected classification failure for order {}: {}", order.id, e);
                (OrderStatus::UnknownError, ProcessOutcome::Recovered { reason: e.to_string() })
            }
        };

        order.status = status;
        order.priority = self.priority_rule.calculate(order.amount);
        persist(self.repository.as_ref(), order).await?;

        Ok(outcome)
    }
}
