use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use orderflow_core::Order;
use orderflow_order::BatchOutcome;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/users/{user_id}/orders/process", post(process_orders))
}

/// POST /v1/users/{user_id}/orders/process
/// Process every order of a user; all or nothing
pub async fn process_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Order>>, AppError> {
    if user_id <= 0 {
        return Err(AppError::ValidationError(format!("Invalid user id: {}", user_id)));
    }

    match state.processor.process_orders(user_id).await {
        BatchOutcome::Completed(orders) => Ok(Json(orders)),
        BatchOutcome::Failed => Err(AppError::ProcessingFailed(format!(
            "Order processing failed for user {}",
            user_id
        ))),
    }
}
