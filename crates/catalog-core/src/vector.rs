//! Bag-of-words term vectors and cosine similarity.
//!
//! [`vectorize`] is the single normalization function used for both indexed
//! documents and incoming queries, which keeps the two in the same vector
//! space.

use std::collections::HashMap;

use serde::Serialize;

/// Sparse term-frequency vector: token → occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermVector {
    terms: HashMap<String, u32>,
}

impl TermVector {
    pub fn get(&self, term: &str) -> u32 {
        self.terms.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, u32)> {
        self.terms.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Sum of squared counts.
    fn squared_norm(&self) -> u64 {
        self.terms.values().map(|&c| u64::from(c) * u64::from(c)).sum()
    }
}

/// Tokens of this length or shorter are dropped.
const MIN_TOKEN_LEN: usize = 2;

/// Turn text into a term vector.
///
/// Lowercases, strips every char that is neither an ASCII word char
/// (`[A-Za-z0-9_]`) nor whitespace, splits on whitespace runs and counts
/// tokens longer than two chars.
///
/// # Example
///
/// ```rust
/// use catalog_core::vector::vectorize;
///
/// let v = vectorize("Tax, tax & TAX planning!");
/// assert_eq!(v.get("tax"), 3);
/// assert_eq!(v.get("planning"), 1);
/// assert!(vectorize("an ox at it").is_empty());
/// ```
pub fn vectorize(text: &str) -> TermVector {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let mut terms: HashMap<String, u32> = HashMap::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() > MIN_TOKEN_LEN {
            *terms.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    TermVector { terms }
}

/// Cosine similarity between two term vectors.
///
/// Terms missing from one side contribute 0 to the dot product. Returns
/// `0.0` when either vector is empty; since counts are non-negative the
/// result is always within `[0.0, 1.0]`.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.squared_norm();
    let norm_b = b.squared_norm();
    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u64 = small
        .terms
        .iter()
        .map(|(term, &c)| u64::from(c) * u64::from(large.get(term)))
        .sum();

    let sim = dot as f64 / ((norm_a as f64).sqrt() * (norm_b as f64).sqrt());
    sim.clamp(0.0, 1.0)
}
