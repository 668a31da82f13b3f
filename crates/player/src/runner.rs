use std::sync::Arc;

use crate::application::Api;
use crate::infrastructure::ApiAdapter;

/// Configuration types for the player runner.
pub mod config {
    use std::time::Duration;

    use crate::application::ResponseOrdering;
    use crate::infrastructure::ApiBase;

    pub const API_URL_VAR: &str = "QUESTSMITH_API_URL";
    pub const RESPONSE_ORDERING_VAR: &str = "QUESTSMITH_RESPONSE_ORDERING";
    pub const REQUEST_TIMEOUT_VAR: &str = "QUESTSMITH_REQUEST_TIMEOUT_MS";

    /// Default API base on native targets
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct ClientConfig {
        pub api_base: ApiBase,
        pub ordering: ResponseOrdering,
        /// `None` waits indefinitely
        pub request_timeout: Option<Duration>,
    }

    impl Default for ClientConfig {
        fn default() -> Self {
            Self {
                api_base: default_api_base(),
                ordering: ResponseOrdering::default(),
                request_timeout: None,
            }
        }
    }

    impl ClientConfig {
        /// Read the configuration from the process environment
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build the configuration from a variable lookup.
        ///
        /// Invalid values are logged and replaced with their default.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let mut config = Self::default();

            if let Some(raw) = non_empty(lookup(API_URL_VAR)) {
                match ApiBase::parse(&raw) {
                    Ok(base) => config.api_base = base,
                    Err(e) => tracing::warn!(var = API_URL_VAR, value = %raw, error = %e, "Ignoring invalid API URL"),
                }
            }

            if let Some(raw) = non_empty(lookup(RESPONSE_ORDERING_VAR)) {
                match raw.parse() {
                    Ok(ordering) => config.ordering = ordering,
                    Err(e) => tracing::warn!(var = RESPONSE_ORDERING_VAR, error = %e, "Ignoring invalid response ordering"),
                }
            }

            if let Some(raw) = non_empty(lookup(REQUEST_TIMEOUT_VAR)) {
                match raw.trim().parse::<u64>() {
                    Ok(0) | Err(_) => {
                        tracing::warn!(var = REQUEST_TIMEOUT_VAR, value = %raw, "Ignoring invalid request timeout")
                    }
                    Ok(ms) => config.request_timeout = Some(Duration::from_millis(ms)),
                }
            }

            config
        }
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn default_api_base() -> ApiBase {
        ApiBase::parse(DEFAULT_API_URL).unwrap_or_default()
    }

    #[cfg(target_arch = "wasm32")]
    fn default_api_base() -> ApiBase {
        ApiBase::SameOrigin
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn config_from(vars: &[(&str, &str)]) -> ClientConfig {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            ClientConfig::from_lookup(|key| vars.get(key).cloned())
        }

        #[test]
        fn defaults_when_unset() {
            let config = config_from(&[]);

            assert_eq!(config.ordering, ResponseOrdering::LastIssuedWins);
            assert_eq!(config.request_timeout, None);
            assert_eq!(
                config.api_base.endpoint("/health"),
                "http://localhost:8000/health"
            );
        }

        #[test]
        fn reads_all_variables() {
            let config = config_from(&[
                (API_URL_VAR, "https://quests.example.com"),
                (RESPONSE_ORDERING_VAR, "last-arrived"),
                (REQUEST_TIMEOUT_VAR, "30000"),
            ]);

            assert_eq!(
                config.api_base.endpoint("/api/quests/generate"),
                "https://quests.example.com/api/quests/generate"
            );
            assert_eq!(config.ordering, ResponseOrdering::LastArrivedWins);
            assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        }

        #[test]
        fn invalid_values_fall_back_to_defaults() {
            let config = config_from(&[
                (API_URL_VAR, "not a url"),
                (RESPONSE_ORDERING_VAR, "random"),
                (REQUEST_TIMEOUT_VAR, "soon"),
            ]);

            assert_eq!(config, ClientConfig::default());
        }

        #[test]
        fn zero_timeout_is_ignored() {
            let config = config_from(&[(REQUEST_TIMEOUT_VAR, "0")]);
            assert_eq!(config.request_timeout, None);
        }
    }
}

use config::ClientConfig;

pub struct RunnerDeps {
    pub api: Api,
    pub config: ClientConfig,
}

impl RunnerDeps {
    /// Wire the HTTP adapter for the given configuration
    pub fn from_config(config: ClientConfig) -> Self {
        let raw_api = Arc::new(ApiAdapter::new(
            config.api_base.clone(),
            config.request_timeout,
        ));
        Self {
            api: Api::new(raw_api),
            config,
        }
    }
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { api, config } = deps;

    tracing::info!(
        api_base = ?config.api_base,
        ordering = ?config.ordering,
        timeout = ?config.request_timeout,
        "Launching quest designer"
    );

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Quest Narrative Designer");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(config.ordering)
        .with_context(crate::ui::presentation::Services::new(api))
        .launch(crate::ui::app);
}
