//! Query-pipeline retrieval over a [`SimilarityIndex`].
//!
//! The index answers raw top-K queries; this module applies the pipeline's
//! tuning (wider candidate pool, minimum similarity) and joins each hit with
//! its [`CourseRecord`] from the [`CorpusStore`].
//!
//! # Pipeline retrieval
//!
//! 1. Ask the index for `top_k` candidates (8 by default).
//! 2. Drop candidates with similarity ≤ `min_similarity` (0.1 by default).
//! 3. Join each candidate with its course; candidates whose course is no
//!    longer in the corpus are dropped.

use std::collections::HashSet;

use crate::corpus::CorpusStore;
use crate::index::SimilarityIndex;
use crate::models::{CourseRecord, RetrievalHit};

/// Retrieval tuning parameters, decoupled from application config.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Number of index candidates to fetch per query.
    pub top_k: usize,
    /// Hits must score strictly above this to be kept.
    pub min_similarity: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            top_k: 8,
            min_similarity: 0.1,
        }
    }
}

/// Run pipeline retrieval for `query`.
pub fn retrieve<'a, I: SimilarityIndex + ?Sized>(
    corpus: &'a CorpusStore,
    index: &I,
    query: &str,
    params: &SearchParams,
) -> Vec<RetrievalHit<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    index
        .search(query, params.top_k)
        .into_iter()
        .filter(|hit| hit.similarity > params.min_similarity)
        .filter_map(|hit| {
            corpus.get(&hit.source_code).map(|course| RetrievalHit {
                source_code: hit.source_code,
                similarity: hit.similarity,
                kind: hit.kind,
                text: hit.text,
                course,
            })
        })
        .collect()
}

/// Distinct courses behind `hits`, in first-seen order.
pub fn unique_courses<'a, 'h>(
    hits: impl IntoIterator<Item = &'h RetrievalHit<'a>>,
) -> Vec<&'a CourseRecord>
where
    'a: 'h,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut courses = Vec::new();
    for hit in hits {
        if seen.insert(hit.course.code.as_str()) {
            courses.push(hit.course);
        }
    }
    courses
}

/// Distinct source codes behind `hits`, in first-seen order.
pub fn unique_codes<'a, 'h>(hits: impl IntoIterator<Item = &'h RetrievalHit<'a>>) -> Vec<String>
where
    'a: 'h,
{
    unique_courses(hits)
        .into_iter()
        .map(|c| c.code.clone())
        .collect()
}
