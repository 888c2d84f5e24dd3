use std::env;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sr_config::{OpenaiConfig, ParametersConfig};
use tracing::trace;

use super::{Provider, decode_arguments};
use crate::{
    error::{Error, Result},
    query::StructuredQuery,
};

/// An OpenAI chat-completions provider using forced function calling.
#[derive(Debug, Clone)]
pub struct Openai {
    client: reqwest::Client,
    base_url: String,
}

impl TryFrom<&OpenaiConfig> for Openai {
    type Error = Error;

    fn try_from(config: &OpenaiConfig) -> Result<Self> {
        let api_key = env::var(&config.api_key_env)
            .map_err(|_| Error::MissingEnv(config.api_key_env.clone()))?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let base_url = env::var(&config.base_url_env).unwrap_or_else(|_| config.base_url.clone());

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()?,
            base_url,
        })
    }
}

#[async_trait]
impl Provider for Openai {
    async fn structured_completion(
        &self,
        model: &str,
        parameters: &ParametersConfig,
        query: StructuredQuery,
    ) -> Result<Map<String, Value>> {
        let request = create_request(model, parameters, &query);
        trace!(?request, "Sending request to OpenAI.");

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                response: response.text().await.unwrap_or_default(),
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let call = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.function_call)
            .ok_or(Error::MissingFunctionCall)?;

        decode_arguments(&call.arguments)
    }
}

fn create_request(
    model: &str,
    parameters: &ParametersConfig,
    query: &StructuredQuery,
) -> ChatCompletionRequest {
    let tool = query.tool_definition();

    ChatCompletionRequest {
        model: model.to_owned(),
        messages: vec![
            Message {
                role: Role::System,
                content: query.system_prompt.clone(),
            },
            Message {
                role: Role::User,
                content: query.user_input.clone(),
            },
        ],
        temperature: parameters.temperature,
        max_tokens: parameters.max_tokens,
        functions: vec![FunctionDefinition {
            name: tool.name.clone(),
            description: tool.description.clone(),
            parameters: tool.to_parameters_schema(),
        }],
        function_call: FunctionCallDirective { name: tool.name },
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    functions: Vec<FunctionDefinition>,
    function_call: FunctionCallDirective,
}

#[derive(Debug, Serialize)]
struct Message {
    role: Role,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Role {
    System,
    User,
}

#[derive(Debug, Serialize)]
struct FunctionDefinition {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    parameters: Value,
}

// Forces the model to call the named function.
#[derive(Debug, Serialize)]
struct FunctionCallDirective {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    arguments: String,
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;
