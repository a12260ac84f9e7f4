use regex::Regex;

use crate::Result;

/// Splits raw post text into word-level tokens.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Whitespace tokenizer with the normalization the scoring engine expects:
/// hyphens become standalone tokens and commas are stripped before
/// segmentation. Leading `#` markers survive so hashtags stay recognizable
/// downstream.
///
/// This is the offline stand-in for a full tokenizer service plugged in
/// behind the [`Tokenize`] seam.
pub struct SimpleTokenizer {
    edge_punct: Regex,
}

impl SimpleTokenizer {
    pub fn new() -> Self {
        let edge_punct = Regex::new(r"^[^\w#]+|[^\w]+$").unwrap();

        Self { edge_punct }
    }
}

impl Default for SimpleTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenize for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let normalized = text.replace('-', " - ").replace(',', " ");

        let mut tokens = Vec::new();
        for raw in normalized.split_whitespace() {
            if raw == "-" {
                tokens.push(raw.to_string());
                continue;
            }
            let trimmed = self.edge_punct.replace_all(raw, "");
            if !trimmed.is_empty() {
                tokens.push(trimmed.into_owned());
            }
        }

        Ok(tokens)
    }
}
