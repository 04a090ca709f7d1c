//! Pairwise scoring and top-K selection

use crate::config::DEFAULT_TOP_K;
use crate::corpus::Corpus;
use crate::similarity::cosine_similarity;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One scored document pair, `first < second`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedPair {
    /// Cosine similarity
    pub score: f64,
    /// Corpus index of the first document
    pub first: usize,
    /// Corpus index of the second document
    pub second: usize,
}

impl RankedPair {
    /// Ranking order: descending score, then ascending `first`, then
    /// ascending `second`
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(self.first.cmp(&other.first))
            .then(self.second.cmp(&other.second))
    }
}

/// Scores every unordered pair of a corpus and keeps the best `top_k`
#[derive(Debug, Clone)]
pub struct PairRanker {
    top_k: usize,
    parallel: bool,
}

impl Default for PairRanker {
    fn default() -> Self {
        PairRanker::new(DEFAULT_TOP_K)
    }
}

impl PairRanker {
    /// Create a sequential ranker keeping `top_k` pairs
    pub fn new(top_k: usize) -> Self {
        PairRanker {
            top_k,
            parallel: false,
        }
    }

    /// Score rows of the pair matrix on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rank all pairs `(i, j)` with `i < j`
    ///
    /// Returns `min(top_k, n * (n - 1) / 2)` pairs in ranking order. The
    /// result does not depend on whether scoring ran in parallel.
    pub fn rank(&self, corpus: &Corpus) -> Vec<RankedPair> {
        let mut pairs = self.score_all(corpus);
        pairs.sort_unstable_by(RankedPair::rank_cmp);
        pairs.truncate(self.top_k);
        pairs
    }

    /// Score every pair, unsorted
    pub fn score_all(&self, corpus: &Corpus) -> Vec<RankedPair> {
        let n = corpus.len();
        if self.parallel {
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| score_row(corpus, i))
                .collect()
        } else {
            let mut pairs = Vec::with_capacity(corpus.pair_count());
            for i in 0..n {
                pairs.extend(score_row(corpus, i));
            }
            pairs
        }
    }
}

/// Pairs `(i, j)` for every `j > i`
fn score_row(corpus: &Corpus, i: usize) -> impl Iterator<Item = RankedPair> + '_ {
    let docs = corpus.documents();
    let a = &docs[i].vector;
    docs[i + 1..]
        .iter()
        .enumerate()
        .map(move |(offset, b)| RankedPair {
            score: cosine_similarity(a, &b.vector),
            first: i,
            second: i + 1 + offset,
        })
}
