//! The query-handling service.
//!
//! [`Assistant`] owns the corpus, the similarity index and the transcript
//! for one session and runs each query through the full pipeline:
//!
//! ```text
//! query ─┬─▶ classify ──────────────┐
//!        └─▶ retrieve (index) ──────┴─▶ respond ─▶ render ─▶ transcript
//! ```
//!
//! Queries are handled one at a time through `&mut self`, so no locking is
//! involved.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::chunk::chunk_all;
use crate::corpus::CorpusStore;
use crate::error::CorpusError;
use crate::index::{BruteForceIndex, IndexHit, SimilarityIndex};
use crate::intent::classify;
use crate::models::CourseRecord;
use crate::render::OutputFormat;
use crate::respond::respond;
use crate::search::{retrieve, unique_codes, SearchParams};
use crate::session::{ConversationTurn, Transcript};
use crate::source::CorpusSource;

pub const GREETING: &str = "Hello! I'm your Course Catalog Assistant. I can help you find \
    information about ACFI courses in the UNH graduate catalog.";
pub const CAPABILITIES: &str = "I can help you with course information, prerequisites, credit \
    requirements, and topic-based searches.";

/// Snapshot of the assistant's data and session state.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantStatus {
    pub initialized: bool,
    pub source: String,
    pub total_courses: usize,
    pub total_documents: usize,
    pub vocabulary_size: usize,
    pub corpus_digest: Option<String>,
    pub last_loaded: Option<DateTime<Utc>>,
    pub session_id: Uuid,
    pub conversation_length: usize,
}

/// Course catalog question-answering service.
pub struct Assistant<S, I = BruteForceIndex> {
    source: S,
    corpus: CorpusStore,
    index: I,
    transcript: Transcript,
    params: SearchParams,
    format: OutputFormat,
    initialized: bool,
    last_loaded: Option<DateTime<Utc>>,
}

impl<S: CorpusSource> Assistant<S, BruteForceIndex> {
    pub fn new(source: S) -> Self {
        Self::with_index(source, BruteForceIndex::new())
    }
}

impl<S: CorpusSource, I: SimilarityIndex> Assistant<S, I> {
    /// Build an assistant over a custom index implementation.
    pub fn with_index(source: S, index: I) -> Self {
        Self {
            source,
            corpus: CorpusStore::new(),
            index,
            transcript: Transcript::new(),
            params: SearchParams::default(),
            format: OutputFormat::default(),
            initialized: false,
            last_loaded: None,
        }
    }

    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Fetch, chunk and index the corpus.
    ///
    /// Returns `false` if the source failed or supplied unusable records.
    /// Failure is not fatal: the assistant keeps answering against an
    /// empty corpus and will retry on the next query.
    pub async fn initialize(&mut self) -> bool {
        info!(source = self.source.name(), "loading course corpus");
        let records = match self.source.fetch().await {
            Ok(records) => records,
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "corpus fetch failed");
                self.corpus.clear();
                self.index.clear();
                self.initialized = false;
                self.last_loaded = None;
                return false;
            }
        };

        match self.load(records) {
            Ok(_) => true,
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "corpus load rejected");
                false
            }
        }
    }

    /// Load already-fetched records, replacing any previous corpus.
    pub fn load(&mut self, records: Vec<CourseRecord>) -> Result<usize, CorpusError> {
        self.index.clear();
        self.initialized = false;
        self.last_loaded = None;
        let count = self.corpus.load(records)?;
        let documents = chunk_all(self.corpus.all());
        self.index.index(&documents);
        self.initialized = true;
        self.last_loaded = Some(Utc::now());
        info!(
            courses = count,
            documents = documents.len(),
            "course corpus loaded"
        );
        Ok(count)
    }

    /// Answer a query and record both sides in the transcript.
    ///
    /// Never fails: an uninitialized corpus is retried first, absent data
    /// produces a "not found"/"no results" answer, and an unexpected
    /// rendering failure produces a generic apology.
    pub async fn process_query(&mut self, query: &str) -> String {
        if !self.initialized {
            self.initialize().await;
        }

        self.transcript.push_user(query);
        let (content, sources) = self.answer(query);
        self.transcript.push_assistant(content.clone(), sources);
        content
    }

    fn answer(&self, query: &str) -> (String, Vec<String>) {
        let intent = classify(query);
        let hits = retrieve(&self.corpus, &self.index, query, &self.params);
        debug!(intent = %intent, hits = hits.len(), "query classified");

        let sources = unique_codes(&hits);
        let response = respond(&intent, &hits, &self.corpus);
        let content = match self.format.render(&response) {
            Ok(content) => content,
            Err(e) => {
                error!(error = %e, intent = intent.name(), "failed to render response");
                self.format.apology()
            }
        };
        (content, sources)
    }

    /// Generic top-K search, without the pipeline's similarity floor.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<IndexHit> {
        self.index.search(query, top_k)
    }

    pub fn corpus(&self) -> &CorpusStore {
        &self.corpus
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn history(&self) -> &[ConversationTurn] {
        self.transcript.turns()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn clear_history(&mut self) {
        self.transcript.clear();
    }

    pub fn greeting(&self) -> String {
        format!("{} {}", GREETING, CAPABILITIES)
    }

    pub fn status(&self) -> AssistantStatus {
        AssistantStatus {
            initialized: self.initialized,
            source: self.source.name().to_string(),
            total_courses: self.corpus.len(),
            total_documents: self.index.len(),
            vocabulary_size: self.index.vocabulary_size(),
            corpus_digest: self.corpus.digest(),
            last_loaded: self.last_loaded,
            session_id: self.transcript.id(),
            conversation_length: self.transcript.len(),
        }
    }
}
