//! Bag-of-words tokenizer
//!
//! A token is a maximal run of ASCII alphanumeric characters, lowercased.
//! Everything else, including any non-ASCII character, is a separator. There
//! is no stemming, stop-word filtering or minimum token length.

use std::collections::HashMap;

/// Sparse word-count vector for one document
///
/// Every stored count is at least 1; a word that is not present has count 0.
/// The squared Euclidean norm and the total token count are computed once at
/// construction since the vector is never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyVector {
    counts: HashMap<String, u32>,
    norm_squared: u64,
    total_tokens: u64,
}

impl FrequencyVector {
    /// Build a vector from raw counts, dropping zero entries
    pub fn from_counts(counts: HashMap<String, u32>) -> Self {
        let counts: HashMap<String, u32> =
            counts.into_iter().filter(|(_, c)| *c > 0).collect();
        let norm_squared = counts.values().map(|&c| u64::from(c) * u64::from(c)).sum();
        let total_tokens = counts.values().map(|&c| u64::from(c)).sum();

        FrequencyVector {
            counts,
            norm_squared,
            total_tokens,
        }
    }

    /// Count for a word, 0 when absent
    pub fn get(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when the document produced no tokens
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (word, count) entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Sum of squared counts
    pub fn norm_squared(&self) -> u64 {
        self.norm_squared
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        (self.norm_squared as f64).sqrt()
    }

    /// Total number of tokens in the document
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }
}

/// Turn raw document text into a frequency vector
pub fn tokenize(text: &str) -> FrequencyVector {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut word = String::new();

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            word.push(c.to_ascii_lowercase());
        } else if !word.is_empty() {
            *counts.entry(std::mem::take(&mut word)).or_insert(0) += 1;
        }
    }

    // Flush a word that runs to end of text
    if !word.is_empty() {
        *counts.entry(word).or_insert(0) += 1;
    }

    FrequencyVector::from_counts(counts)
}
