//! # docsim - Document Similarity
//!
//! Finds the most similar pairs of documents in a directory of plain-text
//! files.
//!
//! docsim provides:
//! - **Bag-of-words tokenization** into sparse word-count vectors
//! - **Cosine similarity** between count vectors
//! - **Exhaustive pair ranking** with deterministic top-K selection
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docsim::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::new(AnalyzerConfig::default());
//! let analysis = analyzer.analyze("./textbooks").unwrap();
//!
//! print!("{}", analysis.report().to_text());
//! ```
//!
//! The pieces can also be used on their own:
//!
//! ```
//! use docsim::{cosine_similarity, tokenize};
//!
//! let a = tokenize("a b c");
//! let b = tokenize("a b");
//! let sim = cosine_similarity(&a, &b);
//! assert!((sim - 0.8165).abs() < 1e-4);
//! ```

pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ranker;
pub mod report;
pub mod scanner;
pub mod similarity;
pub mod source;
pub mod tokenizer;

// Re-exports for convenience
pub use analyzer::{Analysis, AnalysisStats, Analyzer};
pub use config::{AnalyzerConfig, DEFAULT_MIN_CORPUS_SIZE, DEFAULT_TOP_K};
pub use corpus::{Corpus, CorpusBuilder, Document, DocumentId};
pub use error::{Error, Result};
pub use ranker::{PairRanker, RankedPair};
pub use report::{OutputFormat, Report};
pub use scanner::{Scanner, Selection};
pub use similarity::cosine_similarity;
pub use source::{DocumentSource, FsSource, MemorySource};
pub use tokenizer::{tokenize, FrequencyVector};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
