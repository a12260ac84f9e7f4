use std::path::PathBuf;

use anyhow::{bail, Result};

/// Resolved batch-run configuration.
///
/// Built from the CLI arguments; `MINER_*` environment variables override
/// the numeric knobs, so deployments can tune concurrency without touching
/// the invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub posts_path: PathBuf,
    pub keywords_path: PathBuf,
    pub primary_lexicon_path: PathBuf,
    pub secondary_lexicon_path: PathBuf,
    pub stopwords_path: PathBuf,
    pub lemma_model_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
    pub max_concurrent: usize,
    pub lemmatizer_attempts: usize,
    pub json_report_path: Option<PathBuf>,
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var("MINER_MAX_CONCURRENT") {
            if let Ok(value) = raw.parse::<usize>() {
                self.max_concurrent = value;
            }
        }

        if let Ok(raw) = std::env::var("MINER_LEMMATIZER_ATTEMPTS") {
            if let Ok(value) = raw.parse::<usize>() {
                self.lemmatizer_attempts = value;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent == 0 {
            bail!("max_concurrent must be greater than zero");
        }

        if self.lemmatizer_attempts == 0 {
            bail!("lemmatizer_attempts must be greater than zero");
        }

        for (name, path) in [
            ("posts", &self.posts_path),
            ("keywords", &self.keywords_path),
            ("primary lexicon", &self.primary_lexicon_path),
            ("secondary lexicon", &self.secondary_lexicon_path),
            ("stopwords", &self.stopwords_path),
        ] {
            if path.as_os_str().is_empty() {
                bail!("{} path cannot be empty", name);
            }
        }

        Ok(())
    }
}
