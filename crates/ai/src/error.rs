use thiserror::Error;

/// Failure inside a description backend.
///
/// Never surfaced past [`crate::DescriptionGenerator::describe`]; it is logged
/// and replaced by a fallback string.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("upstream response contained no text")]
    EmptyResponse,

    #[error("configuration error: {0}")]
    Config(String),
}
