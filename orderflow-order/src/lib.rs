pub mod priority;
pub mod handler;
pub mod export;
pub mod classification;
pub mod completion;
pub mod selector;
pub mod processor;

#[cfg(test)]
mod test_support;

pub use priority::PriorityRule;
pub use handler::{OrderHandler, ProcessError, ProcessOutcome};
pub use export::ExportHandler;
pub use classification::ClassificationHandler;
pub use completion::CompletionHandler;
pub use selector::{HandlerSelector, OrderKind, SelectionError};
pub use processor::{BatchOutcome, OrderProcessor};
