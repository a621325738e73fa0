//! Jaundice rate: how charged is a news article?
//!
//! Articles are fetched, cut down to their body by a per-site sanitizer,
//! lemmatized and scored by the share of words found in a charged-word
//! dictionary. [`analysis::Analyzer`] runs a batch of URLs concurrently and
//! reports one [`analysis::ArticleResult`] per URL.

pub mod analysis;
pub mod app_state;
pub mod articles;
pub mod charged_words;
pub mod config;
pub mod fetcher;
pub mod health;
pub mod sanitizers;
pub mod text;

use std::sync::Arc;

use crate::text::{DictionaryLemmatizer, Lemmatizer, LexiconError, LowercaseLemmatizer};

/// Lemmatizer from an optional dictionary path.
pub async fn load_lemmatizer(
    dictionary: Option<&std::path::Path>,
) -> Result<Arc<dyn Lemmatizer>, LexiconError> {
    match dictionary {
        Some(path) => {
            let lemmatizer = DictionaryLemmatizer::load(path).await?;
            tracing::info!(path = %path.display(), forms = lemmatizer.len(), "lemma dictionary loaded");
            Ok(Arc::new(lemmatizer))
        }
        None => {
            tracing::warn!("no lemma dictionary configured, falling back to lowercasing");
            Ok(Arc::new(LowercaseLemmatizer))
        }
    }
}
