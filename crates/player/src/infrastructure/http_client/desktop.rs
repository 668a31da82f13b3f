//! Native HTTP adapter using reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{decode_response, ApiBase};
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base: ApiBase,
}

impl ApiAdapter {
    /// Create an adapter; `timeout` of `None` waits indefinitely
    pub fn new(base: ApiBase, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to build HTTP client, using defaults");
            Client::new()
        });

        Self { client, base }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
        decode_response(status, &body)
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.base.endpoint(path);
        tracing::debug!(%url, "GET");
        self.send(self.client.get(url)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.base.endpoint(path);
        tracing::debug!(%url, "POST");
        self.send(self.client.post(url).json(body)).await
    }
}
