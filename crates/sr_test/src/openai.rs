//! Canned `OpenAI` chat-completion wire responses, for HTTP-level
//! tests that stub out the service.

use serde_json::{Value, json};

/// A completion response carrying a function call with the given
/// serialized arguments.
#[must_use]
pub fn function_call_response(name: &str, arguments: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 0,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "function_call": {
                    "name": name,
                    "arguments": arguments,
                },
            },
            "finish_reason": "function_call",
        }],
    })
}

/// A completion response that answered with prose instead of the
/// requested function call.
#[must_use]
pub fn content_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 0,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content,
            },
            "finish_reason": "stop",
        }],
    })
}

/// An `OpenAI`-style error body.
#[must_use]
pub fn error_response(kind: &str, message: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": kind,
            "param": null,
            "code": null,
        },
    })
}
