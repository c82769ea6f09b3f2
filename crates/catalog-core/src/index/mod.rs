//! Similarity index abstraction.
//!
//! The [`SimilarityIndex`] trait is the seam between retrieval callers and
//! the index structure. The shipped [`BruteForceIndex`](memory::BruteForceIndex)
//! scans every document, which is plenty for a corpus of tens to low
//! hundreds of courses; an approximate nearest-neighbour structure can be
//! dropped in behind the same trait without touching callers.

pub mod memory;

pub use memory::BruteForceIndex;

use serde::Serialize;

use crate::models::{Document, DocumentKind};

/// Default number of hits for a generic search.
pub const DEFAULT_TOP_K: usize = 5;

/// A scored document returned from [`SimilarityIndex::search`].
///
/// Carries the lookup key of the owning course rather than the record
/// itself; [`retrieve`](crate::search::retrieve) joins it with the corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexHit {
    pub source_code: String,
    pub kind: DocumentKind,
    /// Cosine similarity, strictly greater than zero.
    pub similarity: f64,
    pub text: String,
}

/// Storage and nearest-neighbour lookup over document term vectors.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`index`](SimilarityIndex::index) | Vectorize and store documents |
/// | [`search`](SimilarityIndex::search) | Top-K cosine search for a query |
/// | [`clear`](SimilarityIndex::clear) | Drop every stored vector |
pub trait SimilarityIndex: Send + Sync {
    /// Vectorize and store `documents`, keyed by `(source_code, kind)`.
    fn index(&mut self, documents: &[Document]);

    /// Return at most `top_k` hits with similarity > 0, best first.
    /// Ties keep document insertion order.
    fn search(&self, query: &str, top_k: usize) -> Vec<IndexHit>;

    /// Number of indexed documents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct terms across all indexed documents.
    fn vocabulary_size(&self) -> usize;

    fn clear(&mut self);
}
