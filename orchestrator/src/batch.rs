use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use lexicon::KeywordSet;
use nlp::{Lemmatize, NlpError, Tokenize};
use scoring::{Document, ScoringPipeline};

use crate::input::RawPost;

/// Read-only pieces shared by every document worker.
pub struct BatchContext {
    pub pipeline: ScoringPipeline,
    pub tokenizer: Box<dyn Tokenize>,
    pub lemmatizer: Box<dyn Lemmatize>,
    pub keywords: KeywordSet,
    pub lemmatizer_attempts: usize,
}

/// Result of a batch run over one posts file.
pub struct BatchOutcome {
    pub documents: Vec<Document>,
    pub total: usize,
    pub skipped: usize,
}

impl BatchOutcome {
    /// Documents with at least one keyword window, in input order.
    pub fn relevant(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|doc| doc.is_relevant())
    }

    pub fn relevant_count(&self) -> usize {
        self.relevant().count()
    }
}

/// Scores every post with at most `max_concurrent` documents in flight.
///
/// Scoring is independent per document once the shared resources are
/// loaded, so posts fan out onto the blocking pool behind a semaphore; a
/// collaborator failure skips that one document and the batch carries on.
pub async fn run_batch(
    ctx: Arc<BatchContext>,
    posts: Vec<RawPost>,
    max_concurrent: usize,
) -> Result<BatchOutcome> {
    let semaphore = Arc::new(Semaphore::new(max_concurrent));
    let mut tasks = JoinSet::new();
    let total = posts.len();

    for post in posts {
        let ctx = Arc::clone(&ctx);
        let permit = Arc::clone(&semaphore).acquire_owned().await?;

        tasks.spawn_blocking(move || {
            let _permit = permit;
            let id = post.id;
            (id, process_post(&ctx, post))
        });
    }

    let mut scored = Vec::with_capacity(total);
    let mut skipped = 0usize;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(document))) => scored.push(document),
            Ok((id, Err(err))) => {
                warn!("Skipping document {}: {}", id, err);
                skipped += 1;
            }
            Err(err) => {
                warn!("Document worker failed: {}", err);
                skipped += 1;
            }
        }
    }

    // Workers finish out of order; reports follow the input file.
    scored.sort_by_key(Document::id);

    Ok(BatchOutcome {
        documents: scored,
        total,
        skipped,
    })
}

fn process_post(ctx: &BatchContext, post: RawPost) -> nlp::Result<Document> {
    let tokens = ctx.tokenizer.tokenize(&post.text)?;
    let lemmas = lemmatize_with_retry(ctx, &tokens)?;

    debug!("Document {}: {} lemmas after preprocessing", post.id, lemmas.len());
    Ok(ctx.pipeline.score(post.id, &post.text, &lemmas, &ctx.keywords))
}

fn lemmatize_with_retry(ctx: &BatchContext, tokens: &[String]) -> nlp::Result<Vec<String>> {
    let mut last_err = None;

    for attempt in 1..=ctx.lemmatizer_attempts {
        match ctx.lemmatizer.lemmatize(tokens) {
            Ok(lemmas) => return Ok(lemmas),
            Err(err) => {
                warn!(
                    "Lemmatization attempt {}/{} failed: {}",
                    attempt, ctx.lemmatizer_attempts, err
                );
                last_err = Some(err);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| NlpError::Lemmatization("no attempts configured".to_string())))
}
