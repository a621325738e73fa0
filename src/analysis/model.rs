use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    Ok,
    FetchError,
    ParsingError,
    Timeout,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::FetchError => "FETCH_ERROR",
            Self::ParsingError => "PARSING_ERROR",
            Self::Timeout => "TIMEOUT",
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurements of a successfully analyzed article.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleStats {
    /// Charged-word percentage, two decimals.
    pub score: f64,
    /// Lemmas kept after the length filter.
    pub word_count: u32,
    /// Seconds spent tokenizing and scoring, two decimals.
    pub elapsed_time: f64,
}

/// One record per requested URL.
///
/// Stats exist only for [`ProcessingStatus::Ok`]; the constructors are the
/// only way to build a record, so a partial success cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleResult {
    url: String,
    status: ProcessingStatus,
    stats: Option<ArticleStats>,
}

impl ArticleResult {
    pub fn ok(url: impl Into<String>, stats: ArticleStats) -> Self {
        Self {
            url: url.into(),
            status: ProcessingStatus::Ok,
            stats: Some(stats),
        }
    }

    /// A failed record. Passing `ProcessingStatus::Ok` is a bug.
    pub fn failed(url: impl Into<String>, status: ProcessingStatus) -> Self {
        debug_assert_ne!(status, ProcessingStatus::Ok, "failed record with OK status");
        Self {
            url: url.into(),
            status,
            stats: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn stats(&self) -> Option<&ArticleStats> {
        self.stats.as_ref()
    }

    pub fn score(&self) -> Option<f64> {
        self.stats.map(|stats| stats.score)
    }

    pub fn word_count(&self) -> Option<u32> {
        self.stats.map(|stats| stats.word_count)
    }

    pub fn elapsed_time(&self) -> Option<f64> {
        self.stats.map(|stats| stats.elapsed_time)
    }
}

impl Serialize for ArticleResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ArticleResult", 5)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("score", &self.score())?;
        state.serialize_field("word_count", &self.word_count())?;
        state.serialize_field("elapsed_time", &self.elapsed_time())?;
        state.end()
    }
}
