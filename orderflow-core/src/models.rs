use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::CoreError;

/// Order status across every processing path
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    New,
    // Export path
    Exported,
    ExportFailed,
    // Classification path
    Processed,
    Pending,
    Error,
    ApiError,
    ApiFailure,
    UnknownError,
    // Local decision path
    Completed,
    InProgress,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Exported => "exported",
            OrderStatus::ExportFailed => "export_failed",
            OrderStatus::Processed => "processed",
            OrderStatus::Pending => "pending",
            OrderStatus::Error => "error",
            OrderStatus::ApiError => "api_error",
            OrderStatus::ApiFailure => "api_failure",
            OrderStatus::UnknownError => "unknown_error",
            OrderStatus::Completed => "completed",
            OrderStatus::InProgress => "in_progress",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s {
            "new" => OrderStatus::New,
            "exported" => OrderStatus::Exported,
            "export_failed" => OrderStatus::ExportFailed,
            "processed" => OrderStatus::Processed,
            "pending" => OrderStatus::Pending,
            "error" => OrderStatus::Error,
            "api_error" => OrderStatus::ApiError,
            "api_failure" => OrderStatus::ApiFailure,
            "unknown_error" => OrderStatus::UnknownError,
            "completed" => OrderStatus::Completed,
            "in_progress" => OrderStatus::InProgress,
            other => return Err(CoreError::UnknownStatus(other.to_string())),
        };
        Ok(status)
    }
}

/// Priority tier derived from the order amount
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "high" => Ok(Priority::High),
            other => Err(CoreError::UnknownPriority(other.to_string())),
        }
    }
}

/// A user's order as read from the store.
///
/// Only `status` and `priority` change after creation, and only when a
/// handler processes the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "type")]
    pub order_type: String,
    pub amount: f64,
    pub flag: bool,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: Priority,
    pub user_id: i64,
}

impl Order {
    pub fn new(id: i64, order_type: impl Into<String>, amount: f64, flag: bool, user_id: i64) -> Self {
        Self {
            id,
            order_type: order_type.into(),
            amount,
            flag,
            status: OrderStatus::New,
            priority: Priority::Low,
            user_id,
        }
    }
}
