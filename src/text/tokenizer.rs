use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::text::lemmatizer::Lemmatizer;

/// Wall-clock budget for tokenizing a single article.
pub const TOKENIZE_BUDGET: Duration = Duration::from_secs(3);

/// Short lemma kept despite the length filter: it carries negation.
pub const NEGATION_PARTICLE: &str = "не";

const MIN_LEMMA_CHARS: usize = 3;

/// Typographic marks removed anywhere inside a token.
const DECORATIVE_CHARS: [char; 3] = ['«', '»', '…'];

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("tokenization exceeded its budget of {budget:?}")]
pub struct TokenizeTimeout {
    pub budget: Duration,
}

/// Removes decorative quotes and ellipses, then trims ASCII punctuation.
pub fn clean_word(word: &str) -> String {
    let without_decorations: String = word
        .chars()
        .filter(|c| !DECORATIVE_CHARS.contains(c))
        .collect();
    without_decorations
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

fn normalize_token(raw: &str, lemmatizer: &dyn Lemmatizer) -> Option<String> {
    let cleaned = clean_word(raw);
    let lemma = lemmatizer.normal_form(&cleaned);
    let lemma = lemma.trim();

    if lemma.is_empty() {
        return None;
    }
    if lemma.chars().count() >= MIN_LEMMA_CHARS || lemma == NEGATION_PARTICLE {
        Some(lemma.to_string())
    } else {
        None
    }
}

/// Splits `text` into lemmas without a time budget.
///
/// Used for trusted inputs such as the charged-word dictionary.
pub fn split_by_words(text: &str, lemmatizer: &dyn Lemmatizer) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| normalize_token(raw, lemmatizer))
        .collect()
}

/// Budgeted article tokenizer.
#[derive(Clone)]
pub struct Tokenizer {
    lemmatizer: Arc<dyn Lemmatizer>,
    budget: Duration,
}

impl Tokenizer {
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        Self::with_budget(lemmatizer, TOKENIZE_BUDGET)
    }

    pub fn with_budget(lemmatizer: Arc<dyn Lemmatizer>, budget: Duration) -> Self {
        Self { lemmatizer, budget }
    }

    /// Same lemmatizer, different budget.
    pub fn rebudgeted(&self, budget: Duration) -> Self {
        Self::with_budget(Arc::clone(&self.lemmatizer), budget)
    }

    /// Normalizes `text` into lemmas, preserving order.
    ///
    /// Yields to the scheduler after every raw token so the deadline and
    /// sibling tasks get polled even on a single-threaded runtime.
    pub async fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeTimeout> {
        let lemmatizer = self.lemmatizer.as_ref();
        let work = async {
            let mut words = Vec::new();
            for raw in text.split_whitespace() {
                if let Some(lemma) = normalize_token(raw, lemmatizer) {
                    words.push(lemma);
                }
                tokio::task::yield_now().await;
            }
            words
        };

        tokio::time::timeout(self.budget, work)
            .await
            .map_err(|_| TokenizeTimeout {
                budget: self.budget,
            })
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("budget", &self.budget)
            .finish_non_exhaustive()
    }
}
