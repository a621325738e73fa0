//! Site-specific article extraction.
//!
//! Every supported news site gets a [`Sanitizer`] that knows where the
//! article body lives in that site's markup. The [`SanitizerRegistry`] picks
//! one by the article URL's host; supporting a new site means registering a
//! new implementation.

pub mod html_tools;
pub mod inosmi;
pub mod registry;

pub use inosmi::InosmiSanitizer;
pub use registry::{SanitizerRegistry, host_key};

use thiserror::Error;

/// Readable content of one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleBody {
    /// Plain text with block boundaries as line breaks.
    pub text: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SanitizeError {
    #[error("no sanitizer registered for host {0}")]
    UnsupportedHost(String),

    #[error("url has no host: {0}")]
    InvalidUrl(String),

    #[error("article body not found in document")]
    ArticleNotFound,
}

/// Extraction rule for one site.
pub trait Sanitizer: Send + Sync {
    /// Host the rule was written for, e.g. `inosmi.ru`.
    fn host(&self) -> &str;

    fn sanitize(&self, html: &str) -> Result<ArticleBody, SanitizeError>;
}
