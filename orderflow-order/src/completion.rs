use async_trait::async_trait;
use orderflow_core::{Order, OrderRepository, OrderStatus};
use std::sync::Arc;

use crate::handler::{persist, OrderHandler, ProcessError, ProcessOutcome};
use crate::priority::PriorityRule;
use crate::selector::OrderKind;

/// Type C: the order flag alone decides completion
pub struct CompletionHandler {
    repository: Arc<dyn OrderRepository>,
    priority_rule: PriorityRule,
}

impl CompletionHandler {
    pub fn new(repository: Arc<dyn OrderRepository>, priority_rule: PriorityRule) -> Self {
        Self { repository, priority_rule }
    }
}

#[async_trait]
impl OrderHandler for CompletionHandler {
    fn kind(&self) -> OrderKind {
        OrderKind::C
    }

    async fn process(&self, order: &mut Order) -> Result<ProcessOutcome, ProcessError> {
        order.status = if order.flag {
            OrderStatus::Completed
        } else {
            OrderStatus::InProgress
        };
        order.priority = self.priority_rule.calculate(order.amount);
        persist(self.repository.as_ref(), order).await?;

        Ok(ProcessOutcome::Updated)
    }
}
