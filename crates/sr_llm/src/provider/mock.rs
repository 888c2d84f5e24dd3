//! A provider returning canned function-call arguments, for tests and
//! offline development.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sr_config::ParametersConfig;

use super::{Provider, decode_arguments};
use crate::{error::Result, query::StructuredQuery};

/// Answers every query with the same function-call arguments.
///
/// The arguments go through the same decoding path as a real
/// response, so malformed fixtures surface the same errors a live
/// service would.
#[derive(Debug, Clone)]
pub struct MockProvider {
    arguments: String,
}

impl MockProvider {
    /// Create a provider answering with `arguments`, a JSON-encoded
    /// object.
    pub fn new(arguments: impl Into<String>) -> Self {
        Self {
            arguments: arguments.into(),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn structured_completion(
        &self,
        _model: &str,
        _parameters: &ParametersConfig,
        _query: StructuredQuery,
    ) -> Result<Map<String, Value>> {
        decode_arguments(&self.arguments)
    }
}
