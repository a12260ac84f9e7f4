use lexicon::{KeywordSet, Stopwords};

use crate::document::Document;
use crate::scorer::SentimentScorer;
use crate::token::{ContextToken, WINDOW_SIZE};
use crate::window::ContextWindow;

/// Turns lemmatized posts into scored documents.
///
/// The pipeline owns the read-only scoring resources and is safe to share
/// across worker threads; all per-call state lives in the returned
/// [`Document`].
pub struct ScoringPipeline {
    scorer: SentimentScorer,
    stopwords: Stopwords,
}

impl ScoringPipeline {
    pub fn new(scorer: SentimentScorer, stopwords: Stopwords) -> Self {
        Self { scorer, stopwords }
    }

    /// Scores one post: drops stopword lemmas, extracts a context window
    /// per keyword occurrence, scores each window immediately and, when at
    /// least one window was found, aggregates the document score.
    ///
    /// A document without keyword occurrences comes back with no windows
    /// and no overall score; callers decide whether it belongs in their
    /// relevant set.
    pub fn score(
        &self,
        id: u64,
        text: &str,
        lemmas: &[String],
        keywords: &KeywordSet,
    ) -> Document {
        let mut document = Document::new(id, text);

        let retained: Vec<&str> = lemmas
            .iter()
            .map(String::as_str)
            .filter(|lemma| !self.stopwords.contains(lemma))
            .collect();

        for (pos, lemma) in retained.iter().enumerate() {
            if !keywords.contains(lemma) {
                continue;
            }

            let mut window = ContextWindow::new(*lemma);

            // Nearest-first on each side, clamped at the sequence bounds.
            let start = pos.saturating_sub(WINDOW_SIZE);
            for visited in (start..pos).rev() {
                window.push(ContextToken::new(
                    retained[visited],
                    visited as isize - pos as isize,
                ));
            }
            let end = (pos + WINDOW_SIZE).min(retained.len() - 1);
            for visited in (pos + 1)..=end {
                window.push(ContextToken::new(
                    retained[visited],
                    visited as isize - pos as isize,
                ));
            }

            window.compute_sentiment(&self.scorer);
            tracing::debug!(
                "Document {}: window for '{}' scored {:?}",
                id,
                window.keyword(),
                window.sentiment()
            );
            document.insert_window(window);
        }

        if document.is_relevant() {
            if let Err(err) = document.compute_overall_sentiment() {
                tracing::error!("Aggregation failed for document {}: {}", id, err);
            }
        }

        document
    }
}
