//! Response bodies returned by the generation API
//!
//! Successful responses carry a quest document and are decoded by the client.
//! This module covers the failure body and the health probe.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Error Body
// =============================================================================

/// Body of a non-success response: `{ "detail": ... }`
///
/// `detail` is usually a string. Request validation failures carry a list of
/// `{ "loc": [...], "msg": "..." }` entries instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    /// Human-readable detail, if the body carries a usable one
    pub fn detail_message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(entries) => {
                let parts: Vec<String> = entries.iter().filter_map(validation_entry).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            _ => None,
        }
    }
}

fn validation_entry(entry: &Value) -> Option<String> {
    let msg = entry.get("msg")?.as_str()?;
    let loc = entry
        .get("loc")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                // The leading "body" segment only says where the field came from
                .filter(|p| p.as_str() != Some("body"))
                .map(|p| match p {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_default();

    if loc.is_empty() {
        Some(msg.to_string())
    } else {
        Some(format!("{loc}: {msg}"))
    }
}

/// Fallback message when the failure body has no usable detail
pub fn status_failure_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// User-facing message for a failed request.
///
/// Uses the server's `detail` when the body is JSON and carries one,
/// otherwise the generic status message.
pub fn failure_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.detail_message())
        .unwrap_or_else(|| status_failure_message(status))
}

// =============================================================================
// Health
// =============================================================================

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
