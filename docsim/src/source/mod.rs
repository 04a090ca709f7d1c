//! Document sources: fetch the raw text behind a document identifier

use crate::corpus::DocumentId;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Capability to read the full text of a document
pub trait DocumentSource {
    /// Read the whole document as a string
    ///
    /// Any failure is reported as [`Error::DocumentRead`].
    fn read(&self, id: &DocumentId) -> Result<String>;
}

/// Reads documents from the filesystem, treating identifiers as paths
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn read(&self, id: &DocumentId) -> Result<String> {
        let bytes = std::fs::read(id.path()).map_err(|e| Error::DocumentRead {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

        String::from_utf8(bytes).map_err(|e| Error::DocumentRead {
            id: id.to_string(),
            reason: format!("not valid UTF-8 ({})", e.utf8_error()),
        })
    }
}

/// In-memory documents keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<DocumentId, String>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document
    pub fn insert(&mut self, id: impl Into<DocumentId>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    /// Number of documents held
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when no documents are held
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<I, T> FromIterator<(I, T)> for MemorySource
where
    I: Into<DocumentId>,
    T: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (I, T)>>(iter: It) -> Self {
        let mut source = MemorySource::new();
        for (id, text) in iter {
            source.insert(id, text);
        }
        source
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, id: &DocumentId) -> Result<String> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| Error::DocumentRead {
                id: id.to_string(),
                reason: "no such document".to_string(),
            })
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn read(&self, id: &DocumentId) -> Result<String> {
        (**self).read(id)
    }
}
