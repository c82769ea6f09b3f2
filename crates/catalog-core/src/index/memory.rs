//! Brute-force [`SimilarityIndex`] implementation.
//!
//! Keeps one [`TermVector`] per document in a `Vec`, so iteration order is
//! corpus order followed by chunk emission order. Search is a linear scan
//! with cosine similarity: O(D·T) per query.

use std::collections::{HashMap, HashSet};

use crate::models::{Document, DocumentKind};
use crate::vector::{cosine_similarity, vectorize, TermVector};

use super::{IndexHit, SimilarityIndex};

struct IndexedDocument {
    document: Document,
    vector: TermVector,
}

/// Linear-scan cosine index.
#[derive(Default)]
pub struct BruteForceIndex {
    entries: Vec<IndexedDocument>,
    positions: HashMap<(String, DocumentKind), usize>,
}

impl BruteForceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `documents` in one step.
    pub fn from_documents(documents: &[Document]) -> Self {
        let mut index = Self::new();
        index.index(documents);
        index
    }
}

impl SimilarityIndex for BruteForceIndex {
    fn index(&mut self, documents: &[Document]) {
        for doc in documents {
            let entry = IndexedDocument {
                vector: vectorize(&doc.text),
                document: doc.clone(),
            };
            let key = (doc.source_code.clone(), doc.kind);
            match self.positions.get(&key) {
                Some(&pos) => self.entries[pos] = entry,
                None => {
                    self.positions.insert(key, self.entries.len());
                    self.entries.push(entry);
                }
            }
        }
    }

    fn search(&self, query: &str, top_k: usize) -> Vec<IndexHit> {
        let query_vec = vectorize(query);
        if query_vec.is_empty() || top_k == 0 {
            return Vec::new();
        }

        let mut hits: Vec<IndexHit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let sim = cosine_similarity(&query_vec, &entry.vector);
                if sim > 0.0 {
                    Some(IndexHit {
                        source_code: entry.document.source_code.clone(),
                        kind: entry.document.kind,
                        similarity: sim,
                        text: entry.document.text.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable: equal scores keep insertion order.
        hits.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(top_k);
        hits
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn vocabulary_size(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|e| e.vector.terms().map(|(t, _)| t))
            .collect::<HashSet<&str>>()
            .len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(code: &str, kind: DocumentKind, text: &str) -> Document {
        Document {
            kind,
            text: text.to_string(),
            source_code: code.to_string(),
        }
    }

    fn sample_index() -> BruteForceIndex {
        BruteForceIndex::from_documents(&[
            doc(
                "ACFI 801",
                DocumentKind::Description,
                "ACFI 801 Corporate Finance: capital structure and valuation.",
            ),
            doc(
                "ACFI 804",
                DocumentKind::Description,
                "ACFI 804 Derivative Securities: derivative pricing and hedging.",
            ),
            doc(
                "ACFI 820",
                DocumentKind::Description,
                "ACFI 820 Tax Planning: taxation and tax research.",
            ),
            doc(
                "ACFI 820",
                DocumentKind::Logistics,
                "ACFI 820 is worth 3 credits and uses Letter Grading",
            ),
        ])
    }

    #[test]
    fn test_search_orders_by_similarity() {
        let index = sample_index();
        let hits = index.search("derivative pricing", 5);
        assert_eq!(hits[0].source_code, "ACFI 804");
        for pair in hits.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        assert!(hits.iter().all(|h| h.similarity > 0.0));
    }

    #[test]
    fn test_search_respects_top_k() {
        let index = sample_index();
        assert_eq!(index.search("acfi", 2).len(), 2);
        assert_eq!(index.search("acfi", 10).len(), 4);
        assert!(index.search("acfi", 0).is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let index = BruteForceIndex::from_documents(&[
            doc("ACFI 802", DocumentKind::Description, "markets"),
            doc("ACFI 801", DocumentKind::Description, "markets"),
            doc("ACFI 803", DocumentKind::Description, "markets"),
        ]);
        let codes: Vec<String> = index
            .search("markets", 5)
            .into_iter()
            .map(|h| h.source_code)
            .collect();
        assert_eq!(codes, vec!["ACFI 802", "ACFI 801", "ACFI 803"]);
    }

    #[test]
    fn test_no_overlap_returns_nothing() {
        let index = sample_index();
        assert!(index.search("quantum chromodynamics", 5).is_empty());
        assert!(index.search("a an", 5).is_empty());
    }

    #[test]
    fn test_reindex_same_key_replaces() {
        let mut index = sample_index();
        index.index(&[doc(
            "ACFI 801",
            DocumentKind::Description,
            "ACFI 801 Renamed: something else entirely.",
        )]);
        assert_eq!(index.len(), 4);
        assert!(index.search("valuation", 5).is_empty());
    }

    #[test]
    fn test_clear_and_vocabulary() {
        let mut index = sample_index();
        assert!(index.vocabulary_size() > 0);
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.vocabulary_size(), 0);
    }
}
