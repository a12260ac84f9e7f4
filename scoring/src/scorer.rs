use lexicon::Lexicon;
use nlp::{Language, Translate};

/// Resolves lemma polarity against a primary lexicon, falling back to a
/// translated lookup in a secondary lexicon on a miss.
///
/// All pieces are injected at construction and read-only afterwards, so a
/// scorer can be shared across worker threads.
pub struct SentimentScorer {
    primary: Lexicon,
    secondary: Lexicon,
    translator: Box<dyn Translate>,
    source: Language,
    target: Language,
}

impl SentimentScorer {
    pub fn new(
        primary: Lexicon,
        secondary: Lexicon,
        translator: Box<dyn Translate>,
        source: Language,
        target: Language,
    ) -> Self {
        Self {
            primary,
            secondary,
            translator,
            source,
            target,
        }
    }

    /// Polarity of `lemma`, `0.0` when neither lexicon knows it.
    ///
    /// A translation failure degrades to a miss instead of aborting the
    /// scoring run.
    pub fn polarity(&self, lemma: &str) -> f64 {
        let polarity = self.primary.lookup(lemma);
        if polarity != 0.0 {
            return polarity;
        }

        match self.translator.translate(lemma, self.source, self.target) {
            Ok(Some(translated)) => self.secondary.lookup(&translated),
            Ok(None) => 0.0,
            Err(err) => {
                tracing::debug!("Translation fallback failed for '{}': {}", lemma, err);
                0.0
            }
        }
    }
}
