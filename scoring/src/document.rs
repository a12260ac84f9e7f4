use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::window::ContextWindow;
use crate::{Result, ScoringError};

/// One social-media post together with the keyword windows found in it.
///
/// Windows are keyed by keyword: when a keyword occurs more than once in a
/// post, the later occurrence's window replaces the earlier one ("one
/// window per keyword"). Insertion order is kept for stable report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    id: u64,
    text: String,
    windows: IndexMap<String, ContextWindow>,
    overall_sentiment: Option<f64>,
}

impl Document {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            windows: IndexMap::new(),
            overall_sentiment: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn windows(&self) -> &IndexMap<String, ContextWindow> {
        &self.windows
    }

    /// Overall score; `None` until [`Document::compute_overall_sentiment`]
    /// ran, which the pipeline only does for relevant documents.
    pub fn overall_sentiment(&self) -> Option<f64> {
        self.overall_sentiment
    }

    /// Registers a scored window under its keyword, replacing any window a
    /// previous occurrence of the same keyword produced.
    pub fn insert_window(&mut self, window: ContextWindow) {
        self.windows.insert(window.keyword().to_string(), window);
    }

    /// A document is relevant once at least one keyword window was found.
    pub fn is_relevant(&self) -> bool {
        !self.windows.is_empty()
    }

    /// Averages the window sentiments. Windows are scored before insertion,
    /// so every window carries a value here. Aggregating a document with no
    /// windows is an explicit error; callers filter irrelevant documents
    /// instead of ever averaging zero of them.
    pub fn compute_overall_sentiment(&mut self) -> Result<f64> {
        if self.windows.is_empty() {
            return Err(ScoringError::EmptyDocument(self.id));
        }

        let sum: f64 = self
            .windows
            .values()
            .map(|window| window.sentiment().unwrap_or(0.0))
            .sum();
        let mean = sum / self.windows.len() as f64;

        self.overall_sentiment = Some(mean);
        Ok(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::SentimentScorer;
    use crate::token::ContextToken;
    use lexicon::Lexicon;
    use nlp::{Language, NoTranslation};

    fn scored_window(keyword: &str, neighbor: &str, polarity: f64) -> ContextWindow {
        let scorer = SentimentScorer::new(
            Lexicon::from_entries([(neighbor.to_string(), polarity)]),
            Lexicon::default(),
            Box::new(NoTranslation),
            Language::German,
            Language::English,
        );
        let mut window = ContextWindow::new(keyword);
        window.push(ContextToken::new(neighbor, 1));
        window.compute_sentiment(&scorer);
        window
    }

    #[test]
    fn test_aggregation_without_windows_is_an_error() {
        let mut document = Document::new(7, "nichts relevantes");
        assert!(matches!(
            document.compute_overall_sentiment(),
            Err(ScoringError::EmptyDocument(7))
        ));
        assert!(document.overall_sentiment().is_none());
    }

    #[test]
    fn test_overall_is_mean_of_window_scores() {
        let mut document = Document::new(1, "text");
        let first = scored_window("film", "gut", 0.8);
        let second = scored_window("sendung", "schlecht", -0.8);
        let expected =
            (first.sentiment().unwrap() + second.sentiment().unwrap()) / 2.0;

        document.insert_window(first);
        document.insert_window(second);
        let overall = document.compute_overall_sentiment().unwrap();

        assert!((overall - expected).abs() < 1e-12);
        assert_eq!(document.overall_sentiment(), Some(overall));
    }

    #[test]
    fn test_repeated_keyword_overwrites_window() {
        let mut document = Document::new(1, "text");
        document.insert_window(scored_window("film", "gut", 0.8));
        document.insert_window(scored_window("film", "schlecht", -0.8));

        assert_eq!(document.windows().len(), 1);
        assert!(document.windows()["film"].sentiment().unwrap() < 0.0);
    }

    #[test]
    fn test_relevance_tracks_windows() {
        let mut document = Document::new(1, "text");
        assert!(!document.is_relevant());

        document.insert_window(scored_window("film", "gut", 0.8));
        assert!(document.is_relevant());
    }
}
