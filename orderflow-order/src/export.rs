use async_trait::async_trait;
use orderflow_core::{ExportSink, Order, OrderRepository, OrderStatus};
use std::sync::Arc;
use tracing::warn;

use crate::handler::{persist, OrderHandler, ProcessError, ProcessOutcome};
use crate::priority::PriorityRule;
use crate::selector::OrderKind;

/// Type A: export the order, then record whether the export succeeded
pub struct ExportHandler {
    repository: Arc<dyn OrderRepository>,
    exporter: Arc<dyn ExportSink>,
    priority_rule: PriorityRule,
}

impl ExportHandler {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        exporter: Arc<dyn ExportSink>,
        priority_rule: PriorityRule,
    ) -> Self {
        Self { repository, exporter, priority_rule }
    }
}

#[async_trait]
impl OrderHandler for ExportHandler {
    fn kind(&self) -> OrderKind {
        OrderKind::A
    }

    async fn process(&self, order: &mut Order) -> Result<ProcessOutcome, ProcessError> {
        let outcome = match self.exporter.write_order(order).await {
            Ok(()) => {
                order.status = OrderStatus::Exported;
                ProcessOutcome::Updated
            }
            Err(e) => {
                warn!("Export of order {} failed: {}", order.id, e);
                order.status = OrderStatus::ExportFailed;
                ProcessOutcome::Recovered { reason: e.to_string() }
            }
        };

        order.priority = self.priority_rule.calculate(order.amount);
        persist(self.repository.as_ref(), order).await?;

        Ok(outcome)
    }
}
