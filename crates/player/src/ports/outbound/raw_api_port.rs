//! Raw API Port - Object-safe HTTP boundary
//!
//! The application layer stores the adapter behind `Arc<dyn RawApiPort>` and
//! does the typed serde conversions on top (see `application::api::Api`).
//! Paths are absolute (`/api/quests/generate`); the adapter resolves them
//! against its configured base URL.

use serde_json::Value;

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
