use orderflow_core::{ClassificationClient, ExportSink, OrderRepository};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::classification::ClassificationHandler;
use crate::completion::CompletionHandler;
use crate::export::ExportHandler;
use crate::handler::OrderHandler;
use crate::priority::PriorityRule;

/// The closed set of order type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    A,
    B,
    C,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::A => "A",
            OrderKind::B => "B",
            OrderKind::C => "C",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(OrderKind::A),
            "B" => Ok(OrderKind::B),
            "C" => Ok(OrderKind::C),
            other => Err(SelectionError {
                order_type: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order type: {order_type}")]
pub struct SelectionError {
    pub order_type: String,
}

/// Owns one shared handler per order kind
pub struct HandlerSelector {
    repository: Arc<dyn OrderRepository>,
    export: ExportHandler,
    classification: ClassificationHandler,
    completion: CompletionHandler,
}

impl HandlerSelector {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        classifier: Arc<dyn ClassificationClient>,
        exporter: Arc<dyn ExportSink>,
        priority_rule: PriorityRule,
    ) -> Self {
        Self {
            export: ExportHandler::new(repository.clone(), exporter, priority_rule),
            classification: ClassificationHandler::new(repository.clone(), classifier, priority_rule),
            completion: CompletionHandler::new(repository.clone(), priority_rule),
            repository,
        }
    }

    /// Store the handlers write through
    pub fn repository(&self) -> &Arc<dyn OrderRepository> {
        &self.repository
    }

    pub fn handler(&self, kind: OrderKind) -> &dyn OrderHandler {
        match kind {
            OrderKind::A => &self.export,
            OrderKind::B => &self.classification,
            OrderKind::C => &self.completion,
        }
    }

    /// Resolve a raw type tag to its handler
    pub fn select(&self, order_type: &str) -> Result<&dyn OrderHandler, SelectionError> {
        let kind = order_type.parse::<OrderKind>()?;
        Ok(self.handler(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Harness;

    #[test]
    fn test_known_tags() {
        let harness = Harness::nominal(vec![]);
        for kind in [OrderKind::A, OrderKind::B, OrderKind::C] {
            let handler = harness.selector.select(kind.as_str()).unwrap();
            assert_eq!(handler.kind(), kind);
        }
    }

    #[test]
    fn test_unknown_tag_is_reported() {
        let harness = Harness::nominal(vec![]);
        let err = harness.selector.select("D").err().unwrap();
        assert_eq!(err.order_type, "D");
        assert_eq!(err.to_string(), "Unknown order type: D");
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("a".parse::<OrderKind>().is_err());
        assert!("".parse::<OrderKind>().is_err());
    }

    #[test]
    fn test_handlers_are_reused() {
        let harness = Harness::nominal(vec![]);
        let first = harness.selector.select("B").unwrap() as *const _ as *const ();
        let second = harness.selector.select("B").unwrap() as *const _ as *const ();
        assert_eq!(first, second);
    }
}
