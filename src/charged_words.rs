//! The charged-word dictionary.
//!
//! Charged words are stored as plain text files (any layout, one or more
//! words per line) under a directory. Every file is normalized with the same
//! lemmatizer used for articles so both sides compare lemma to lemma.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::text::{Lemmatizer, split_by_words};

/// Immutable set of charged lemmas shared by every worker of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargedWords {
    lemmas: HashSet<String>,
}

impl ChargedWords {
    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains(lemma)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lemmas.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ChargedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lemmas: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ChargedWordsError {
    #[error("failed to walk charged words directory {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read charged words file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no .txt files found in {0}")]
    Empty(PathBuf),
}

/// Loads and lemmatizes every `*.txt` file below `directory`.
#[instrument(skip_all, fields(directory = %directory.as_ref().display()))]
pub async fn load_charged_words(
    directory: impl AsRef<Path>,
    lemmatizer: &dyn Lemmatizer,
) -> Result<ChargedWords, ChargedWordsError> {
    let directory = directory.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry.map_err(|source| ChargedWordsError::Walk {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(ChargedWordsError::Empty(directory.to_path_buf()));
    }

    let mut lemmas = HashSet::new();
    for path in &files {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ChargedWordsError::Read {
                path: path.clone(),
                source,
            })?;
        let words = split_by_words(&contents, lemmatizer);
        debug!(file = %path.display(), words = words.len(), "loaded charged words file");
        lemmas.extend(words);
    }

    info!(files = files.len(), lemmas = lemmas.len(), "charged words loaded");
    Ok(ChargedWords { lemmas })
}
