//! Corpus construction
//!
//! A corpus is the ordered, read-only list of documents analyzed in one run.
//! Document order is the order the identifiers were supplied in and is what
//! pair indices refer to.

use crate::config::DEFAULT_MIN_CORPUS_SIZE;
use crate::error::{Error, Result};
use crate::source::DocumentSource;
use crate::tokenizer::{tokenize, FrequencyVector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque document identifier, usually a file path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier interpreted as a filesystem path
    pub fn path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId(s.to_string())
    }
}

impl From<&Path> for DocumentId {
    fn from(p: &Path) -> Self {
        DocumentId(p.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for DocumentId {
    fn from(p: PathBuf) -> Self {
        DocumentId::from(p.as_path())
    }
}

/// A document and its word counts
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Identifier supplied by the scanner
    pub id: DocumentId,
    /// Bag-of-words representation
    pub vector: FrequencyVector,
}

/// Ordered collection of documents, indexed `0..len()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Tokenize in-memory texts into a corpus, keeping their order
    pub fn from_texts<I, D, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = (D, T)>,
        D: Into<DocumentId>,
        T: AsRef<str>,
    {
        let documents = texts
            .into_iter()
            .map(|(id, text)| Document {
                id: id.into(),
                vector: tokenize(text.as_ref()),
            })
            .collect();
        Corpus { documents }
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when the corpus holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document at `index`
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// All documents in corpus order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Document identifiers in corpus order
    pub fn ids(&self) -> impl Iterator<Item = &DocumentId> + '_ {
        self.documents.iter().map(|d| &d.id)
    }

    /// Total tokens across all documents
    pub fn total_tokens(&self) -> u64 {
        self.documents.iter().map(|d| d.vector.total_tokens()).sum()
    }

    /// Number of unordered document pairs, `n * (n - 1) / 2`
    pub fn pair_count(&self) -> usize {
        let n = self.documents.len();
        n * n.saturating_sub(1) / 2
    }
}

/// Builds a [`Corpus`] from identifiers and a [`DocumentSource`]
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    min_corpus_size: usize,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        CorpusBuilder::new(DEFAULT_MIN_CORPUS_SIZE)
    }
}

impl CorpusBuilder {
    /// Create a builder that refuses corpora smaller than `min_corpus_size`
    pub fn new(min_corpus_size: usize) -> Self {
        CorpusBuilder { min_corpus_size }
    }

    /// Read and tokenize every document, in order
    ///
    /// Fails with [`Error::InsufficientCorpus`] before reading anything when
    /// there are too few identifiers, and with [`Error::DocumentRead`] on the
    /// first document that cannot be read.
    pub fn build<S>(&self, ids: Vec<DocumentId>, source: &S) -> Result<Corpus>
    where
        S: DocumentSource + ?Sized,
    {
        if ids.len() < self.min_corpus_size {
            return Err(Error::InsufficientCorpus {
                found: ids.len(),
                required: self.min_corpus_size,
            });
        }

        let mut documents = Vec::with_capacity(ids.len());
        for id in ids {
            let text = source.read(&id)?;
            let vector = tokenize(&text);
            tracing::debug!(
                "Tokenized {}: {} tokens, {} distinct",
                id,
                vector.total_tokens(),
                vector.len()
            );
            documents.push(Document { id, vector });
        }

        tracing::debug!("Built corpus of {} documents", documents.len());
        Ok(Corpus { documents })
    }
}
