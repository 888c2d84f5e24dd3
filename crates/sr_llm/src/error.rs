pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing a provider or executing a
/// structured call.
///
/// Nothing is retried or downgraded; every error propagates to the
/// caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The environment variable holding the API key is not set.
    #[error("missing env var: {0}")]
    MissingEnv(String),

    /// The API key cannot be turned into an HTTP header value.
    #[error("API key is not a valid header value")]
    InvalidApiKey,

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with an error status.
    #[error("service returned {status}: {response}")]
    Status {
        status: reqwest::StatusCode,
        response: String,
    },

    /// The service declined to produce the forced function call.
    #[error("response is missing the structured function call")]
    MissingFunctionCall,

    /// The returned function-call arguments are not valid JSON.
    #[error("unable to decode function call arguments: {0}")]
    Decode(#[from] serde_json::Error),

    /// The returned arguments are valid JSON, but not an object.
    #[error("function call arguments must be a JSON object, got: {0}")]
    NotAnObject(serde_json::Value),
}

#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        if std::mem::discriminant(self) != std::mem::discriminant(other) {
            return false;
        }

        // Good enough for testing purposes
        format!("{self:?}") == format!("{other:?}")
    }
}
