// Keyword-context sentiment scoring core.
//
// Documents are scored with a lexicon (bag-of-words) approach anchored on
// keywords: each keyword occurrence collects a bounded window of
// surrounding lemmas, every lemma contributes its dictionary polarity
// weighted by proximity, negation and emphasis, and the window scores are
// averaged into a document score.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod document;
pub mod pipeline;
pub mod scorer;
pub mod token;
pub mod window;

pub use document::Document;
pub use pipeline::ScoringPipeline;
pub use scorer::SentimentScorer;
pub use token::{ContextToken, WINDOW_SIZE};
pub use window::{ContextWindow, TokenScore};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Document {0} has no keyword windows to aggregate")]
    EmptyDocument(u64),
}

/// Result type alias for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;
