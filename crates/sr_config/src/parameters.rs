use serde::{Deserialize, Serialize};

/// Request parameters shared by all providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ParametersConfig {
    /// Sampling temperature, typically in `[0, 2]`.
    ///
    /// Zero makes the model as deterministic as it gets, which is what
    /// you want when the response has to conform to a schema.
    pub temperature: f32,

    /// Maximum number of tokens to generate.
    ///
    /// This can usually be left unset, in which case the provider's
    /// own limit applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_tokens: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_parameters_defaults() {
        let parameters = ParametersConfig::default();

        assert_eq!(parameters.temperature, 0.0);
        assert_eq!(parameters.max_tokens, None);
    }

    #[test]
    fn test_parameters_deserialize_partial() {
        let parameters: ParametersConfig =
            serde_json::from_str(r#"{"temperature": 0.7}"#).unwrap();

        assert_eq!(parameters.temperature, 0.7);
        assert_eq!(parameters.max_tokens, None);
    }
}
