use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::batch::Analyzer;
use crate::analysis::model::{ArticleResult, ArticleStats, ProcessingStatus};
use crate::fetcher::FetchError;
use crate::sanitizers::SanitizeError;
use crate::text::{TokenizeTimeout, calculate_jaundice_rate, round2};

/// First failing stage of an article.
#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("sanitize failed: {0}")]
    Sanitize(#[from] SanitizeError),

    #[error(transparent)]
    Tokenize(#[from] TokenizeTimeout),
}

impl ArticleError {
    pub fn status(&self) -> ProcessingStatus {
        match self {
            Self::Fetch(err) if err.is_timeout() => ProcessingStatus::Timeout,
            Self::Fetch(_) => ProcessingStatus::FetchError,
            Self::Sanitize(_) => ProcessingStatus::ParsingError,
            Self::Tokenize(_) => ProcessingStatus::Timeout,
        }
    }
}

impl Analyzer {
    /// Runs one URL through the pipeline and classifies the outcome.
    pub async fn process_article(&self, url: &str) -> ArticleResult {
        match self.analyze(url).await {
            Ok(stats) => {
                info!(
                    score = stats.score,
                    word_count = stats.word_count,
                    elapsed_time = stats.elapsed_time,
                    "article analyzed"
                );
                ArticleResult::ok(url, stats)
            }
            Err(err) => {
                let status = err.status();
                warn!(%status, error = %err, "article failed");
                ArticleResult::failed(url, status)
            }
        }
    }

    /// Fetch, sanitize, tokenize, score. Stops at the first failing stage.
    pub async fn analyze(&self, url: &str) -> Result<ArticleStats, ArticleError> {
        let page = self.fetcher.fetch(url, self.fetch_timeout).await?;

        let sanitizer = self.sanitizers.resolve(url)?;
        let body = sanitizer.sanitize(&page.body_utf8)?;

        let started = Instant::now();
        let words = self.tokenizer.tokenize(&body.text).await?;
        let score = calculate_jaundice_rate(&words, &self.charged_words);
        let elapsed = started.elapsed();

        Ok(ArticleStats {
            score,
            word_count: word_count(words.len()),
            elapsed_time: round2(elapsed.as_secs_f64()),
        })
    }
}

/// Clamps a lemma count to the record's `u32` field.
///
/// Unreachable in practice: a body is at most 5 MiB, and every kept lemma
/// takes at least two bytes plus a separator.
fn word_count(lemmas: usize) -> u32 {
    u32::try_from(lemmas).unwrap_or(u32::MAX)
}
