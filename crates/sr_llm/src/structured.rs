//! Reusable structured calls: a prompt and response schema bound to a
//! provider, invoked with varying user input.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sr_config::ParametersConfig;
use tracing::debug;

use crate::{
    error::Result,
    provider::Provider,
    query::StructuredQuery,
    schema::{ResponseSchema, with_original_input},
};

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A reusable structured call.
///
/// Captures the prompt, the response schema and the request settings
/// once, then issues one request per [`call`](Self::call) invocation.
/// Cloning is cheap and clones share the underlying provider.
#[derive(Debug, Clone)]
pub struct StructuredCall {
    provider: Arc<dyn Provider>,
    prompt: String,
    properties: ResponseSchema,
    model: String,
    parameters: ParametersConfig,
    include_original_input: bool,
}

impl StructuredCall {
    /// Create a structured call with the default model and request
    /// parameters, echoing the original input as a response field.
    #[must_use]
    pub fn new(
        provider: Arc<dyn Provider>,
        prompt: impl Into<String>,
        properties: ResponseSchema,
    ) -> Self {
        Self {
            provider,
            prompt: prompt.into(),
            properties,
            model: DEFAULT_MODEL.to_owned(),
            parameters: ParametersConfig::default(),
            include_original_input: true,
        }
    }

    /// Use a different model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.parameters.temperature = temperature;
        self
    }

    /// Replace the request parameters wholesale.
    #[must_use]
    pub fn with_parameters(mut self, parameters: ParametersConfig) -> Self {
        self.parameters = parameters;
        self
    }

    /// Do not ask the model to echo the original input.
    #[must_use]
    pub fn without_original_input(mut self) -> Self {
        self.include_original_input = false;
        self
    }

    /// The schema sent to the service, including the synthetic
    /// original-input property when enabled.
    #[must_use]
    pub fn effective_schema(&self) -> ResponseSchema {
        if self.include_original_input {
            with_original_input(&self.properties)
        } else {
            self.properties.clone()
        }
    }

    /// Issue one request structuring `user_input`, returning the
    /// decoded response fields.
    pub async fn call(&self, user_input: &str) -> Result<Map<String, Value>> {
        debug!(model = %self.model, "Executing structured call.");

        let query = StructuredQuery::new(&self.prompt, user_input, self.effective_schema());

        self.provider
            .structured_completion(&self.model, &self.parameters, query)
            .await
    }

    /// Like [`call`](Self::call), but deserialize the response fields
    /// into `T`.
    pub async fn call_as<T: DeserializeOwned>(&self, user_input: &str) -> Result<T> {
        let fields = self.call(user_input).await?;

        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

#[cfg(test)]
#[path = "structured_tests.rs"]
mod tests;
