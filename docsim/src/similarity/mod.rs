//! Cosine similarity between frequency vectors

use crate::tokenizer::FrequencyVector;

/// Cosine similarity of two frequency vectors
///
/// `dot(a, b) / (|a| * |b|)`. Returns 0.0 when either vector is empty, so the
/// result is always finite and lies in `[0, 1]`.
///
/// The dot product and both squared norms are exact integer sums, which makes
/// the score bit-for-bit symmetric in its arguments.
pub fn cosine_similarity(a: &FrequencyVector, b: &FrequencyVector) -> f64 {
    if a.norm_squared() == 0 || b.norm_squared() == 0 {
        return 0.0;
    }

    let dot = dot_product(a, b);
    if dot == 0 {
        return 0.0;
    }

    dot as f64 / (a.norm() * b.norm())
}

/// Integer dot product; words missing from either side contribute 0
pub fn dot_product(a: &FrequencyVector, b: &FrequencyVector) -> u64 {
    // Walk the smaller vector and look up each word in the larger one
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    small
        .iter()
        .map(|(word, count)| u64::from(count) * u64::from(large.get(word)))
        .sum()
}
