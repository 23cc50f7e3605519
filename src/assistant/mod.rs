pub mod assessment;
pub mod chat;
pub mod classifier;
pub mod ollama;
pub mod prompt;

pub use assessment::*;
pub use chat::*;
pub use classifier::*;
pub use ollama::*;
pub use prompt::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Ollama is not running at {0}")]
    OllamaConnection(String),

    #[error("Ollama returned error (status {status}): {body}")]
    OllamaError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Invalid assessment: {0}")]
    InvalidAssessment(String),
}
