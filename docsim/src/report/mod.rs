//! Rendering of ranked pairs for people and for tools

use crate::corpus::DocumentId;
use crate::error::Result;
use crate::ranker::RankedPair;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per pair (default)
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(crate::error::Error::ConfigError(format!(
                "Unknown output format: {}",
                s
            ))),
        }
    }
}

/// One reported pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// 1-based rank
    pub rank: usize,
    /// Cosine similarity
    pub score: f64,
    /// First document identifier
    pub first: DocumentId,
    /// Second document identifier
    pub second: DocumentId,
    /// Corpus index of the first document
    pub first_index: usize,
    /// Corpus index of the second document
    pub second_index: usize,
}

/// Ranked pairs with their document names resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Number of documents in the corpus
    pub documents: usize,
    /// Requested number of pairs
    pub top_k: usize,
    /// Pairs in ranking order
    pub pairs: Vec<ReportEntry>,
}

impl Report {
    /// Resolve pair indices against the corpus identifiers
    ///
    /// # Panics
    ///
    /// Panics if a pair refers to an index outside `ids`.
    pub fn new(ids: &[DocumentId], ranked: &[RankedPair], top_k: usize) -> Self {
        let pairs = ranked
            .iter()
            .enumerate()
            .map(|(i, pair)| ReportEntry {
                rank: i + 1,
                score: pair.score,
                first: ids[pair.first].clone(),
                second: ids[pair.second].clone(),
                first_index: pair.first,
                second_index: pair.second,
            })
            .collect();

        Report {
            generated_at: Utc::now(),
            documents: ids.len(),
            top_k,
            pairs,
        }
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Plain text, one `Pair N: a and b with similarity: s` line per pair
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Top {} similar pairs:", self.top_k);
        for entry in &self.pairs {
            let _ = writeln!(
                out,
                "Pair {}: {} and {} with similarity: {}",
                entry.rank, entry.first, entry.second, entry.score
            );
        }
        out
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
