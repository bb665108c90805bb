use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Verdict returned by the remote classification service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResponse {
    pub status: String,
    #[serde(default)]
    pub data: Option<ClassificationData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassificationData {
    #[serde(default)]
    pub amount: Option<f64>,
}

impl ClassificationResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn success(amount: Option<f64>) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            data: Some(ClassificationData { amount }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }

    /// Amount from the verdict; `None` means the verdict is incomplete
    pub fn amount(&self) -> Option<f64> {
        self.data.as_ref().and_then(|d| d.amount)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    /// Recognized failure of the classification API itself
    #[error("Classification API error: {0}")]
    Api(String),

    #[error("Unexpected classification failure: {0}")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait]
pub trait ClassificationClient: Send + Sync {
    /// Ask the classification service for a verdict on an order
    async fn classify(&self, order_id: i64) -> Result<ClassificationResponse, ClassificationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_verdict() {
        let body = r#"{"status":"success","data":{"id":1,"type":"B","amount":60,"flag":false}}"#;
        let response: ClassificationResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.amount(), Some(60.0));
    }

    #[test]
    fn test_parse_incomplete_verdict() {
        let response: ClassificationResponse =
            serde_json::from_str(r#"{"status":"success","data":{}}"#).unwrap();
        assert!(response.is_success());
        assert_eq!(response.amount(), None);

        let response: ClassificationResponse = serde_json::from_str(r#"{"status":"failure"}"#).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.amount(), None);
    }
}
