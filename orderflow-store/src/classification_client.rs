//! HTTP client for the remote order classification service.

use async_trait::async_trait;
use orderflow_core::{ClassificationClient, ClassificationError, ClassificationResponse};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

pub struct HttpClassificationClient {
    client: Client,
    base_url: String,
}

impl HttpClassificationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, order_id: i64) -> String {
        format!("{}/orders/{}/classification", self.base_url, order_id)
    }

    /// Non-2xx statuses are API failures; a 2xx body that does not parse is unexpected
    fn interpret(status: StatusCode, body: &str) -> Result<ClassificationResponse, ClassificationError> {
        if !status.is_success() {
            return Err(ClassificationError::Api(format!("HTTP {status}: {body}")));
        }

        serde_json::from_str(body).map_err(|e| ClassificationError::Unexpected(Box::new(e)))
    }
}

#[async_trait]
impl ClassificationClient for HttpClassificationClient {
    async fn classify(&self, order_id: i64) -> Result<ClassificationResponse, ClassificationError> {
        let url = self.endpoint(order_id);
        debug!("Requesting classification for order {} from {}", order_id, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClassificationError::Api(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassificationError::Api(format!("Failed to read response: {e}")))?;

        Self::interpret(status, &body)
    }
}
