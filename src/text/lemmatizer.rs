use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Morphological normalizer: maps a word form to its dictionary form.
///
/// Implementations must be total; an unknown word normalizes to itself.
#[cfg_attr(test, mockall::automock)]
pub trait Lemmatizer: Send + Sync {
    fn normal_form(&self, word: &str) -> String;
}

/// Lowercases the word and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseLemmatizer;

impl Lemmatizer for LowercaseLemmatizer {
    fn normal_form(&self, word: &str) -> String {
        word.to_lowercase()
    }
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lemma dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lemma dictionary entry on line {line}: {content:?}")]
    Malformed { line: usize, content: String },
}

/// Lookup-table lemmatizer backed by a `form<TAB>lemma` file.
///
/// Forms are matched case-insensitively. Words missing from the table fall
/// back to their lowercased form.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    forms: HashMap<String, String>,
}

impl DictionaryLemmatizer {
    pub fn from_pairs<I, F, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, L)>,
        F: AsRef<str>,
        L: Into<String>,
    {
        let forms = pairs
            .into_iter()
            .map(|(form, lemma)| (form.as_ref().to_lowercase(), lemma.into()))
            .collect();
        Self { forms }
    }

    /// Parses dictionary contents. Blank lines and `#` comments are skipped.
    pub fn parse(contents: &str) -> Result<Self, LexiconError> {
        let mut forms = HashMap::new();

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((form, lemma)) = line.split_once('\t') else {
                return Err(LexiconError::Malformed {
                    line: index + 1,
                    content: line.to_string(),
                });
            };

            let (form, lemma) = (form.trim(), lemma.trim());
            if form.is_empty() || lemma.is_empty() {
                return Err(LexiconError::Malformed {
                    line: index + 1,
                    content: line.to_string(),
                });
            }

            forms.insert(form.to_lowercase(), lemma.to_lowercase());
        }

        Ok(Self { forms })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LexiconError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&contents)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn normal_form(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        match self.forms.get(&lowered) {
            Some(lemma) => lemma.clone(),
            None => lowered,
        }
    }
}
