use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{Instrument, info, info_span, instrument};

use crate::analysis::model::{ArticleResult, ProcessingStatus};
use crate::charged_words::ChargedWords;
use crate::fetcher::{DEFAULT_FETCH_TIMEOUT, Fetcher};
use crate::sanitizers::SanitizerRegistry;
use crate::text::{Lemmatizer, Tokenizer};

/// Batch coordinator and the dependencies every article worker shares.
///
/// All fields are read-only handles; cloning shares the HTTP pool, the
/// lemmatizer, the sanitizer registry and the charged-word set.
#[derive(Clone, Debug)]
pub struct Analyzer {
    pub(crate) fetcher: Fetcher,
    pub(crate) tokenizer: Tokenizer,
    pub(crate) sanitizers: Arc<SanitizerRegistry>,
    pub(crate) charged_words: Arc<ChargedWords>,
    pub(crate) fetch_timeout: Duration,
}

impl Analyzer {
    pub fn new(
        fetcher: Fetcher,
        lemmatizer: Arc<dyn Lemmatizer>,
        sanitizers: Arc<SanitizerRegistry>,
        charged_words: Arc<ChargedWords>,
    ) -> Self {
        Self {
            fetcher,
            tokenizer: Tokenizer::new(lemmatizer),
            sanitizers,
            charged_words,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn with_tokenize_budget(mut self, budget: Duration) -> Self {
        self.tokenizer = self.tokenizer.rebudgeted(budget);
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    pub fn sanitizers(&self) -> &SanitizerRegistry {
        &self.sanitizers
    }

    pub fn charged_words(&self) -> &ChargedWords {
        &self.charged_words
    }

    /// Analyzes every URL concurrently and returns one record per URL.
    ///
    /// Duplicates are processed independently. Records come back in
    /// completion order. Returns only after every task has finished; a panic
    /// inside a task is re-raised here instead of being turned into a status.
    #[instrument(skip_all, fields(urls = tracing::field::Empty))]
    pub async fn run<I, S>(&self, urls: I) -> Vec<ArticleResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tasks = JoinSet::new();
        for url in urls {
            let url: String = url.into();
            let analyzer = self.clone();
            let span = info_span!("article", url = %url);
            tasks.spawn(async move { analyzer.process_article(&url).await }.instrument(span));
        }

        let total = tasks.len();
        tracing::Span::current().record("urls", total);
        info!(total, fetch_timeout = ?self.fetch_timeout, "batch started");

        let mut results = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(result) => results.push(result),
                Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
                Err(err) => panic!("article task cancelled unexpectedly: {err}"),
            }
        }

        let succeeded = results
            .iter()
            .filter(|result| result.status() == ProcessingStatus::Ok)
            .count();
        info!(total, succeeded, failed = total - succeeded, "batch finished");

        results
    }

    /// [`run`](Self::run) with a per-call fetch timeout.
    pub async fn run_with_timeout<I, S>(&self, urls: I, fetch_timeout: Duration) -> Vec<ArticleResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clone().with_fetch_timeout(fetch_timeout).run(urls).await
    }
}
