use crate::{
    schema::ResponseSchema,
    tool::{SCHEMA_FUNCTION_DESCRIPTION, SCHEMA_FUNCTION_NAME, ToolDefinition},
};

/// A single structured-response request.
///
/// Carries the fixed system prompt, the user input for this
/// invocation, and the effective response schema. The user input may
/// be empty; it is passed through to the service unmodified.
#[derive(Debug, Clone)]
pub struct StructuredQuery {
    /// The system prompt steering the model.
    pub system_prompt: String,

    /// The free-text user input to structure.
    pub user_input: String,

    schema: ResponseSchema,
}

impl StructuredQuery {
    /// Create a new structured query.
    #[must_use]
    pub fn new(
        system_prompt: impl Into<String>,
        user_input: impl Into<String>,
        schema: ResponseSchema,
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_input: user_input.into(),
            schema,
        }
    }

    /// The effective schema for this request.
    #[must_use]
    pub fn schema(&self) -> &ResponseSchema {
        &self.schema
    }

    /// The definition of the function the service is instructed to
    /// call.
    #[must_use]
    pub fn tool_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: SCHEMA_FUNCTION_NAME.to_owned(),
            description: Some(SCHEMA_FUNCTION_DESCRIPTION.to_owned()),
            parameters: self.schema.clone(),
        }
    }
}
