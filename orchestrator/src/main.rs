use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use lexicon::{KeywordSet, Keywords, Lexicon, Stopwords};
use nlp::{
    DictionaryLemmatizer, DictionaryTranslator, IdentityLemmatizer, Language, Lemmatize,
    NoTranslation, SimpleTokenizer, Translate,
};
use scoring::{ScoringPipeline, SentimentScorer};

mod batch;
mod config;
mod input;
mod report;

use batch::BatchContext;
use config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyword-anchored sentiment scoring for social-media posts", long_about = None)]
struct Args {
    /// Posts file, one `id<TAB>text` record per line
    #[arg(long, default_value = "res/posts_demo.tsv")]
    posts: PathBuf,

    /// Keywords of interest, tab-separated
    #[arg(long, default_value = "res/keywords.tsv")]
    keywords: PathBuf,

    /// Primary sentiment lexicon (`word<TAB>score`)
    #[arg(long, default_value = "res/lexicon_de.tsv")]
    primary_lexicon: PathBuf,

    /// Secondary sentiment lexicon used through the translation fallback
    #[arg(long, default_value = "res/lexicon_en.tsv")]
    secondary_lexicon: PathBuf,

    /// Stopword list, one word per line
    #[arg(long, default_value = "res/stopwords_de.txt")]
    stopwords: PathBuf,

    /// Lemma model (`form<TAB>lemma`); tokens pass through lower-cased when omitted
    #[arg(long)]
    lemma_model: Option<PathBuf>,

    /// German-to-English word map for the lexicon-miss fallback
    #[arg(long)]
    translations: Option<PathBuf>,

    /// Documents scored concurrently
    #[arg(long, default_value = "8")]
    max_concurrent: usize,

    /// Lemmatization attempts per document before it is skipped
    #[arg(long, default_value = "2")]
    lemmatizer_attempts: usize,

    /// Write the full report as JSON to this path
    #[arg(long)]
    json_report: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            posts_path: self.posts,
            keywords_path: self.keywords,
            primary_lexicon_path: self.primary_lexicon,
            secondary_lexicon_path: self.secondary_lexicon,
            stopwords_path: self.stopwords,
            lemma_model_path: self.lemma_model,
            translations_path: self.translations,
            max_concurrent: self.max_concurrent,
            lemmatizer_attempts: self.lemmatizer_attempts,
            json_report_path: self.json_report,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = Args::parse().into_config();
    config.apply_env_overrides();
    config.validate()?;

    info!("Starting keyword sentiment batch run (scoring core {})", scoring::VERSION);

    let ctx = Arc::new(build_context(&config)?);
    let post_file = input::read_posts(&config.posts_path)?;
    info!(
        "Read {} posts ({} malformed lines skipped)",
        post_file.posts.len(),
        post_file.malformed
    );

    let mut outcome = batch::run_batch(ctx, post_file.posts, config.max_concurrent).await?;
    outcome.skipped += post_file.malformed;
    outcome.total += post_file.malformed;

    let mut formatter = report::ResultFormatter::new();
    for document in outcome.relevant() {
        formatter.display_document(document);
    }
    formatter.display_summary(&outcome);

    if let Some(path) = &config.json_report_path {
        let batch_report = report::BatchReport::from_outcome(&outcome);
        report::write_json_report(path, &batch_report)?;
    }

    info!("Batch run completed");
    Ok(())
}

/// Loads every startup resource and wires the pipeline together. A missing
/// or malformed resource file aborts here, before any post is touched.
fn build_context(config: &Config) -> Result<BatchContext> {
    let primary =
        Lexicon::load(&config.primary_lexicon_path).context("failed to load primary lexicon")?;
    let secondary = Lexicon::load(&config.secondary_lexicon_path)
        .context("failed to load secondary lexicon")?;
    let stopwords =
        Stopwords::load(&config.stopwords_path).context("failed to load stopwords")?;
    info!(
        "Loaded lexicons ({} + {} entries) and {} stopwords",
        primary.len(),
        secondary.len(),
        stopwords.len()
    );

    let lemmatizer: Box<dyn Lemmatize> = match &config.lemma_model_path {
        Some(path) => {
            Box::new(DictionaryLemmatizer::load(path).context("failed to load lemma model")?)
        }
        None => Box::new(IdentityLemmatizer),
    };

    let translator: Box<dyn Translate> = match &config.translations_path {
        Some(path) => Box::new(
            DictionaryTranslator::load(path, Language::German, Language::English)
                .context("failed to load translation table")?,
        ),
        None => Box::new(NoTranslation),
    };

    let keywords = load_keywords(&config.keywords_path, lemmatizer.as_ref())?;
    info!("Tracking {} keyword lemmas", keywords.len());

    let scorer = SentimentScorer::new(
        primary,
        secondary,
        translator,
        Language::German,
        Language::English,
    );

    Ok(BatchContext {
        pipeline: ScoringPipeline::new(scorer, stopwords),
        tokenizer: Box::new(SimpleTokenizer::new()),
        lemmatizer,
        keywords,
        lemmatizer_attempts: config.lemmatizer_attempts,
    })
}

/// Keywords are matched against lemmatized posts, so the list itself (with
/// its hashtag variants) goes through the same lemmatizer first.
fn load_keywords(path: &PathBuf, lemmatizer: &dyn Lemmatize) -> Result<KeywordSet> {
    let keywords = Keywords::load(path)
        .context("failed to load keywords")?
        .with_hashtag_variants();
    let lemmas = lemmatizer
        .lemmatize(&keywords.to_vec())
        .context("failed to lemmatize keywords")?;
    Ok(KeywordSet::from_lemmas(lemmas))
}
