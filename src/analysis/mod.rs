//! The concurrent article-processing pipeline.
//!
//! [`Analyzer::run`] fans a batch of URLs out to one task each. Every task
//! walks fetch → sanitize → tokenize → score and ends in exactly one
//! [`ProcessingStatus`]; failures stay local to their URL.

pub mod batch;
pub mod model;
pub mod worker;

pub use batch::Analyzer;
pub use model::{ArticleResult, ArticleStats, ProcessingStatus};
pub use worker::ArticleError;
