//! `OpenAI` API configuration.

use serde::{Deserialize, Serialize};

/// `OpenAI` API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OpenaiConfig {
    /// Environment variable that contains the API key.
    pub api_key_env: String,

    /// The base URL to use for API requests.
    ///
    /// Used if the variable named by `base_url_env` is not set.
    pub base_url: String,

    /// Environment variable that contains the API base URL.
    pub base_url_env: String,
}

impl Default for OpenaiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_owned(),
            base_url: "https://api.openai.com".to_owned(),
            base_url_env: "OPENAI_BASE_URL".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_openai_config_defaults() {
        let config = OpenaiConfig::default();

        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.base_url_env, "OPENAI_BASE_URL");
    }

    #[test]
    fn test_openai_config_deserialize_partial() {
        let config: OpenaiConfig =
            serde_json::from_str(r#"{"api_key_env": "MY_OPENAI_KEY"}"#).unwrap();

        assert_eq!(config.api_key_env, "MY_OPENAI_KEY");
        assert_eq!(config.base_url, "https://api.openai.com");
    }
}
