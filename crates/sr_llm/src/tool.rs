use serde_json::Value;

use crate::schema::{ResponseSchema, parameters_schema};

// Name of the schema enforcement function.
pub(crate) const SCHEMA_FUNCTION_NAME: &str = "structured_response";

// Description attached to the schema enforcement function.
pub(crate) const SCHEMA_FUNCTION_DESCRIPTION: &str = "Responses must always be structured this way";

/// The definition of the function the service is forced to call.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: Option<String>,
    pub parameters: ResponseSchema,
}

impl ToolDefinition {
    /// Return a JSON schema for the parameters of the function, with
    /// every parameter required.
    #[must_use]
    pub fn to_parameters_schema(&self) -> Value {
        parameters_schema(&self.parameters)
    }
}
