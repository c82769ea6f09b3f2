//! Corpus loader abstraction.
//!
//! Fetching and parsing the catalog happens outside the core. A
//! [`CorpusSource`] hands the core an already-structured list of
//! [`CourseRecord`]s; the core never performs network or file I/O itself.
//!
//! # Example
//!
//! ```rust
//! use anyhow::Result;
//! use async_trait::async_trait;
//! use catalog_core::models::{CourseRecord, Credits};
//! use catalog_core::source::CorpusSource;
//!
//! struct OneCourse;
//!
//! #[async_trait]
//! impl CorpusSource for OneCourse {
//!     fn name(&self) -> &str {
//!         "one-course"
//!     }
//!
//!     async fn fetch(&self) -> Result<Vec<CourseRecord>> {
//!         Ok(vec![CourseRecord::new("ACFI 801", "Corporate Finance", Credits::Fixed(3), "...")])
//!     }
//! }
//! ```

use anyhow::Result;
use async_trait::async_trait;

use crate::models::CourseRecord;

/// Supplies the course records for a session.
///
/// `fetch` is the only suspending step in the assistant. It runs once
/// before the first query, and again on later queries until it succeeds.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Short identifier used in logs and status output.
    fn name(&self) -> &str;

    /// Produce the full list of course records.
    async fn fetch(&self) -> Result<Vec<CourseRecord>>;
}

#[async_trait]
impl<S: CorpusSource + ?Sized> CorpusSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch(&self) -> Result<Vec<CourseRecord>> {
        (**self).fetch().await
    }
}

/// A source backed by an in-memory list, for tests and embedded hosts.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<CourseRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CorpusSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<CourseRecord>> {
        Ok(self.records.clone())
    }
}
