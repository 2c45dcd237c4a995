//! Error types for page construction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PageError>;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("No element matches root selector: {0}")]
    RootNotFound(String),

    #[error("Document error: {0}")]
    Dom(#[from] dom::DomError),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}
