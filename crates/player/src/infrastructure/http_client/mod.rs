//! HTTP adapter for the generation API
//!
//! Native builds use `reqwest`, wasm builds use `gloo-net`. Both implement
//! [`RawApiPort`](crate::ports::outbound::RawApiPort) and share the URL and
//! response handling below.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

use serde_json::Value;
use url::Url;

use crate::ports::outbound::ApiError;

/// Where requests are sent
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApiBase {
    /// Relative paths, resolved by the browser against the page origin
    #[default]
    SameOrigin,
    /// Absolute base URL; any path prefix on it is kept
    Url(Url),
}

impl ApiBase {
    /// Parse a configured base URL
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("not a base URL: {raw}")));
        }
        Ok(Self::Url(url))
    }

    /// Full request URL for an API path such as `/api/quests/generate`
    pub fn endpoint(&self, path: &str) -> String {
        match self {
            Self::SameOrigin => path.to_string(),
            Self::Url(base) => format!(
                "{}/{}",
                base.as_str().trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
        }
    }
}

/// Turn a completed response into the port result.
///
/// Any 2xx is a success and must carry a JSON body; anything else becomes an
/// [`ApiError::HttpError`] built from the body's `detail`.
pub(crate) fn decode_response(status: u16, body: &[u8]) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        tracing::warn!(status, "API request failed");
        return Err(ApiError::from_failed_response(status, body));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn same_origin_keeps_relative_path() {
        assert_eq!(
            ApiBase::SameOrigin.endpoint("/api/quests/generate"),
            "/api/quests/generate"
        );
    }

    #[test]
    fn base_url_joins_without_double_slash() {
        let base = ApiBase::parse("http://localhost:8000/").expect("valid base");
        assert_eq!(
            base.endpoint("/api/quests/generate"),
            "http://localhost:8000/api/quests/generate"
        );

        let prefixed = ApiBase::parse("https://tools.example.com/questsmith").expect("valid base");
        assert_eq!(
            prefixed.endpoint("/health"),
            "https://tools.example.com/questsmith/health"
        );
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(matches!(
            ApiBase::parse("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ApiBase::parse("mailto:someone@example.com"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn any_2xx_is_success() {
        assert_eq!(
            decode_response(201, br#"{"title":"T"}"#),
            Ok(json!({ "title": "T" }))
        );
    }

    #[test]
    fn success_with_bad_body_is_parse_error() {
        assert!(matches!(
            decode_response(200, b"<html>"),
            Err(ApiError::ParseError(_))
        ));
    }

    #[test]
    fn failure_uses_server_detail_or_status() {
        assert_eq!(
            decode_response(500, br#"{"detail":"model unavailable"}"#)
                .map_err(|e| e.to_string()),
            Err("model unavailable".to_string())
        );
        assert_eq!(
            decode_response(502, b"").map_err(|e| e.to_string()),
            Err("Request failed with status 502".to_string())
        );
    }
}
