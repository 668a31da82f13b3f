//! Browser HTTP adapter using gloo-net

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;

use super::{decode_response, ApiBase};
use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct ApiAdapter {
    base: ApiBase,
}

impl ApiAdapter {
    /// The browser owns timeouts; the argument is accepted for parity with
    /// the native adapter and ignored.
    pub fn new(base: ApiBase, _timeout: Option<std::time::Duration>) -> Self {
        Self { base }
    }
}

async fn read(response: Result<Response, gloo_net::Error>) -> Result<Value, ApiError> {
    let response = response.map_err(|e| ApiError::RequestFailed(e.to_string()))?;
    let status = response.status();
    let body = response
        .binary()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
    decode_response(status, &body)
}

#[async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.base.endpoint(path);
        tracing::debug!(%url, "GET");
        read(Request::get(&url).send().await).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.base.endpoint(path);
        tracing::debug!(%url, "POST");
        let request = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))?;
        read(request.send().await).await
    }
}
