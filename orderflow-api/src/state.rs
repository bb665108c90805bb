use std::sync::Arc;
use orderflow_order::OrderProcessor;

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<OrderProcessor>,
}
