use thiserror::Error;

#[derive(Error, Debug)]
pub enum NlpError {
    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Tokenization error: {0}")]
    Tokenization(String),

    #[error("Lemmatization error: {0}")]
    Lemmatization(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for NLP collaborator operations
pub type Result<T> = std::result::Result<T, NlpError>;
