use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response encoding: {0}")]
    InvalidEncoding(String),
}

/// Outcome of a recipe search that produced no usable list.
///
/// `EmptyResult` is not a failure of the collaborator: the call succeeded
/// but nothing survived ranking or filtering. Callers should check
/// [`SearchError::is_empty_result`] before reporting an error.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Recipe search request failed: {0}")]
    Network(#[from] FetchError),

    #[error("Malformed recipe search response: {0}")]
    MalformedResponse(String),

    #[error("No matching recipes")]
    EmptyResult,
}

impl SearchError {
    pub fn is_empty_result(&self) -> bool {
        matches!(self, SearchError::EmptyResult)
    }
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("No ingredients given")]
    MissingIngredients,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Malformed menu response: {0}")]
    MalformedResponse(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
