//! Upstream connection configuration.
//!
//! The four connection settings come from the process environment and are
//! validated once at startup into an explicit [`ApiConfig`]. Nothing else
//! in the crate reads the environment.

use crate::error::ConfigError;

/// Environment variable naming the endpoint base URL.
pub const ENV_ENDPOINT: &str = "AZURE_ENDPOINT";
/// Environment variable naming the API key.
pub const ENV_API_KEY: &str = "AZURE_API_KEY";
/// Environment variable naming the model deployment.
pub const ENV_DEPLOYMENT: &str = "DEPLOYMENT_NAME";
/// Environment variable naming the API version string.
pub const ENV_API_VERSION: &str = "API_VERSION";

/// All variables required to construct an [`ApiConfig`].
pub const REQUIRED_ENV_VARS: [&str; 4] =
    [ENV_ENDPOINT, ENV_API_KEY, ENV_DEPLOYMENT, ENV_API_VERSION];

/// Connection settings for the upstream completion API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Endpoint base URL, without a trailing slash
    pub endpoint: String,
    /// API key sent in the `api-key` header
    pub api_key: String,
    /// Deployment (model) identifier
    pub deployment: String,
    /// API version query parameter
    pub api_version: String,
}

impl ApiConfig {
    /// Build the config from the process environment.
    ///
    /// Fails with a single [`ConfigError::MissingEnv`] naming every unset
    /// variable, not just the first.
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut get = |name: &str| {
            lookup(name).unwrap_or_else(|| {
                missing.push(name.to_string());
                String::new()
            })
        };

        let endpoint = get(ENV_ENDPOINT);
        let api_key = get(ENV_API_KEY);
        let deployment = get(ENV_DEPLOYMENT);
        let api_version = get(ENV_API_VERSION);

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv(missing));
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            deployment,
            api_version,
        })
    }

    /// Full chat-completions URL for this deployment.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }

    /// Which of the required variables are currently unset.
    pub fn missing_env_vars() -> Vec<String> {
        REQUIRED_ENV_VARS
            .iter()
            .filter(|name| std::env::var(name).map_or(true, |v| v.is_empty()))
            .map(|name| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_complete() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (ENV_ENDPOINT, "https://example.openai.azure.com/"),
            (ENV_API_KEY, "secret"),
            (ENV_DEPLOYMENT, "gpt-4o"),
            (ENV_API_VERSION, "2024-02-01"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "https://example.openai.azure.com");
        assert_eq!(config.deployment, "gpt-4o");
    }

    #[test]
    fn test_from_lookup_enumerates_all_missing() {
        let err = ApiConfig::from_lookup(lookup_from(&[(ENV_API_KEY, "secret")])).unwrap_err();

        match err {
            ConfigError::MissingEnv(names) => {
                assert_eq!(names, vec![ENV_ENDPOINT, ENV_DEPLOYMENT, ENV_API_VERSION]);
            }
            other => panic!("Expected MissingEnv, got {other}"),
        }
    }

    #[test]
    fn test_missing_env_message_names_every_variable() {
        let err = ApiConfig::from_lookup(|_| None).unwrap_err();
        let message = err.to_string();
        for name in REQUIRED_ENV_VARS {
            assert!(message.contains(name), "message missing {name}: {message}");
        }
    }

    #[test]
    fn test_completions_url_shape() {
        let config = ApiConfig {
            endpoint: "https://example.openai.azure.com".to_string(),
            api_key: "secret".to_string(),
            deployment: "gpt-4o".to_string(),
            api_version: "2024-02-01".to_string(),
        };
        assert_eq!(
            config.completions_url(),
            "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-02-01"
        );
    }
}
