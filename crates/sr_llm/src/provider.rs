pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde_json::{Map, Value};
use sr_config::ParametersConfig;

use crate::{error::Result, query::StructuredQuery};

/// A service capable of answering structured queries.
///
/// Implementations are injected into [`crate::StructuredCall`], which
/// never constructs one itself.
#[async_trait]
pub trait Provider: std::fmt::Debug + Send + Sync {
    /// Execute a single structured query and return the decoded
    /// response fields.
    async fn structured_completion(
        &self,
        model: &str,
        parameters: &ParametersConfig,
        query: StructuredQuery,
    ) -> Result<Map<String, Value>>;
}

/// Decode the JSON-encoded function-call arguments into response
/// fields.
pub(crate) fn decode_arguments(arguments: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(arguments)? {
        Value::Object(map) => Ok(map),
        value => Err(crate::Error::NotAnObject(value)),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use test_log::test;

    use super::*;
    use crate::Error;

    #[test]
    fn test_decode_arguments() {
        struct TestCase {
            arguments: &'static str,
            expected: std::result::Result<Vec<&'static str>, Error>,
        }

        let cases = vec![
            ("object", TestCase {
                arguments: r#"{"original_input": "hi", "mood": "friendly"}"#,
                expected: Ok(vec!["original_input", "mood"]),
            }),
            ("empty object", TestCase {
                arguments: "{}",
                expected: Ok(vec![]),
            }),
            ("array", TestCase {
                arguments: "[1, 2]",
                expected: Err(Error::NotAnObject(serde_json::json!([1, 2]))),
            }),
            ("scalar", TestCase {
                arguments: "42",
                expected: Err(Error::NotAnObject(serde_json::json!(42))),
            }),
        ];

        for (name, case) in cases {
            let result = decode_arguments(case.arguments)
                .map(|map| map.keys().map(String::to_owned).collect::<Vec<_>>());

            match case.expected {
                Ok(keys) => assert_eq!(result.unwrap(), keys, "case: {name}"),
                Err(error) => assert_eq!(result.unwrap_err(), error, "case: {name}"),
            }
        }
    }

    #[test]
    fn test_decode_arguments_invalid_json() {
        assert_matches!(decode_arguments("{not json"), Err(Error::Decode(_)));
        assert_matches!(decode_arguments(""), Err(Error::Decode(_)));
    }
}
