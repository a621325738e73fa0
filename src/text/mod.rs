//! Text normalization and scoring.
//!
//! Articles are reduced to a bag of lemmas by the [`Tokenizer`] and scored
//! against a [`ChargedWords`](crate::charged_words::ChargedWords) set.

pub mod lemmatizer;
pub mod scorer;
pub mod tokenizer;

pub use lemmatizer::{DictionaryLemmatizer, LexiconError, Lemmatizer, LowercaseLemmatizer};
pub use scorer::{calculate_jaundice_rate, round2};
pub use tokenizer::{
    NEGATION_PARTICLE, TOKENIZE_BUDGET, TokenizeTimeout, Tokenizer, clean_word, split_by_words,
};
