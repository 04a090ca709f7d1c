//! End-to-end analysis: scan a directory, build the corpus, rank pairs

use crate::config::AnalyzerConfig;
use crate::corpus::{Corpus, CorpusBuilder, DocumentId};
use crate::error::Result;
use crate::ranker::{PairRanker, RankedPair};
use crate::report::Report;
use crate::scanner::Scanner;
use crate::source::{DocumentSource, FsSource};
use std::path::Path;
use std::time::{Duration, Instant};

/// Statistics from an analysis run
#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    /// Number of documents in the corpus
    pub documents: usize,
    /// Number of pairs scored
    pub pairs_scored: usize,
    /// Total tokens across all documents
    pub tokens: u64,
    /// Time spent building the corpus
    pub build_time: Duration,
    /// Time spent scoring and ranking
    pub rank_time: Duration,
    /// Total time taken
    pub duration: Duration,
}

/// Result of an analysis run
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Document identifiers in corpus order
    pub ids: Vec<DocumentId>,
    /// Best pairs in ranking order
    pub pairs: Vec<RankedPair>,
    /// Requested number of pairs
    pub top_k: usize,
    /// Run statistics
    pub stats: AnalysisStats,
}

impl Analysis {
    /// Build a presentable report
    pub fn report(&self) -> Report {
        Report::new(&self.ids, &self.pairs, self.top_k)
    }
}

/// Document similarity analyzer
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Analyzer { config }
    }

    /// Analyze the documents in a directory
    pub fn analyze<P: AsRef<Path>>(&self, root: P) -> Result<Analysis> {
        let root = root.as_ref();
        let ids = Scanner::new(root, self.config.selection.clone())
            .recursive(self.config.recursive)
            .scan()?;

        tracing::info!("Found {} documents in {}", ids.len(), root.display());
        self.analyze_with_source(ids, &FsSource)
    }

    /// Analyze already-enumerated documents read through `source`
    pub fn analyze_with_source<S>(&self, ids: Vec<DocumentId>, source: &S) -> Result<Analysis>
    where
        S: DocumentSource + ?Sized,
    {
        let start = Instant::now();

        let corpus = CorpusBuilder::new(self.config.min_corpus_size).build(ids, source)?;
        let build_time = start.elapsed();

        let rank_start = Instant::now();
        let pairs = self.rank(&corpus);
        let rank_time = rank_start.elapsed();

        let stats = AnalysisStats {
            documents: corpus.len(),
            pairs_scored: corpus.pair_count(),
            tokens: corpus.total_tokens(),
            build_time,
            rank_time,
            duration: start.elapsed(),
        };

        tracing::info!(
            "Scored {} pairs across {} documents ({} tokens) in {:?}",
            stats.pairs_scored,
            stats.documents,
            stats.tokens,
            stats.duration
        );

        Ok(Analysis {
            ids: corpus.ids().cloned().collect(),
            pairs,
            top_k: self.config.top_k,
            stats,
        })
    }

    /// Rank an existing corpus
    pub fn rank(&self, corpus: &Corpus) -> Vec<RankedPair> {
        PairRanker::new(self.config.top_k)
            .with_parallel(self.config.parallel)
            .rank(corpus)
    }
}
