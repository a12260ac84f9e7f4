use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scorer::SentimentScorer;
use crate::token::ContextToken;

// Piecewise normalization constants: negative contributions are scaled
// harder than positive ones (1/(2*1.5) vs 1/(2*1.0)).
const NEGATIVE_SCALE: f64 = 1.0 / 3.0;
const POSITIVE_SCALE: f64 = 1.0 / 2.0;
// Root of the final compression toward [-1, 1].
const SPREAD: f64 = 3.0;

/// Per-token scoring record, kept for report output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenScore {
    pub lemma: String,
    pub weight: i32,
    pub polarity: f64,
}

/// The lemmas surrounding one keyword occurrence and the sentiment they
/// carry for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextWindow {
    keyword: String,
    tokens: Vec<ContextToken>,
    sentiment: Option<f64>,
    trace: Vec<TokenScore>,
}

impl ContextWindow {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            tokens: Vec::new(),
            sentiment: None,
            trace: Vec::new(),
        }
    }

    pub fn push(&mut self, token: ContextToken) {
        self.tokens.push(token);
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn tokens(&self) -> &[ContextToken] {
        &self.tokens
    }

    pub fn sentiment(&self) -> Option<f64> {
        self.sentiment
    }

    pub fn trace(&self) -> &[TokenScore] {
        &self.trace
    }

    /// Scores the window against the lexicons.
    ///
    /// Each token contributes its polarity (negation subtracts 0.5,
    /// emphasis doubles) times its distance weight, normalized piecewise;
    /// the mean of the contributions is compressed with a cube root that
    /// preserves sign and exact zero. A pure function of the tokens:
    /// recomputing yields the same value.
    pub fn compute_sentiment(&mut self, scorer: &SentimentScorer) -> f64 {
        if self.tokens.is_empty() {
            // A keyword with no neighborhood (one-token document) is
            // neutral, not a division by zero.
            self.trace.clear();
            self.sentiment = Some(0.0);
            return 0.0;
        }

        let mut trace = Vec::with_capacity(self.tokens.len());
        let mut sum = 0.0;

        for token in &self.tokens {
            let mut polarity = scorer.polarity(token.lemma());

            if token.is_negated() {
                polarity -= 0.5;
            }
            if token.is_emphasized() {
                polarity *= 2.0;
            }

            trace.push(TokenScore {
                lemma: token.lemma().to_string(),
                weight: token.distance_weight(),
                polarity,
            });

            let x = polarity * f64::from(token.distance_weight());
            sum += if x < 0.0 { NEGATIVE_SCALE * x } else { POSITIVE_SCALE * x };
        }

        let mean = sum / self.tokens.len() as f64;
        let sentiment = mean.signum() * mean.abs().powf(1.0 / SPREAD);

        self.trace = trace;
        self.sentiment = Some(sentiment);
        sentiment
    }
}

impl fmt::Display for ContextWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<{}>>", self.keyword)?;
        for score in &self.trace {
            write!(f, "\t{} [{}, {:.3}]", score.lemma, score.weight, score.polarity)?;
        }
        if let Some(sentiment) = self.sentiment {
            write!(f, "\n    Sentiment score: {:.4}", sentiment)?;
        }
        Ok(())
    }
}
