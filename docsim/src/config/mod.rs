//! Analyzer configuration

use crate::scanner::Selection;

/// Smallest corpus the analyzer will rank
pub const DEFAULT_MIN_CORPUS_SIZE: usize = 64;

/// Number of pairs reported
pub const DEFAULT_TOP_K: usize = 10;

/// Default substring a file name must contain to be analyzed
pub const DEFAULT_NAME_FILTER: &str = ".txt";

/// Analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Refuse to rank corpora with fewer documents than this
    pub min_corpus_size: usize,
    /// Maximum number of pairs to report
    pub top_k: usize,
    /// Which files in the directory are documents
    pub selection: Selection,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Score pairs on the rayon thread pool
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            min_corpus_size: DEFAULT_MIN_CORPUS_SIZE,
            top_k: DEFAULT_TOP_K,
            selection: Selection::default(),
            recursive: false,
            parallel: false,
        }
    }
}
