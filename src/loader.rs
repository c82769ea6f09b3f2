//! Corpus loaders for the application.
//!
//! The core crate only knows the [`CorpusSource`] trait. This module
//! provides the two concrete sources the CLI can be configured with:
//!
//! | `corpus.source` | Loader | Data |
//! |-----------------|--------|------|
//! | `builtin` | [`BuiltinCatalog`] | ACFI catalog compiled into the binary |
//! | `file` | [`JsonFileSource`] | Catalog JSON read from disk at startup |
//!
//! Both accept either `{ "courses": [...] }` or a bare array of records.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use catalog_core::models::CourseRecord;
use catalog_core::source::CorpusSource;
use serde::Deserialize;

use crate::config::Config;

const BUILTIN_CATALOG: &str = include_str!("../data/acfi_courses.json");

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { courses: Vec<CourseRecord> },
    Bare(Vec<CourseRecord>),
}

/// Parse catalog JSON in either accepted shape.
pub fn parse_catalog(json: &str) -> Result<Vec<CourseRecord>> {
    let doc: CatalogDocument =
        serde_json::from_str(json).context("catalog is not a list of course records")?;
    Ok(match doc {
        CatalogDocument::Wrapped { courses } => courses,
        CatalogDocument::Bare(courses) => courses,
    })
}

/// The UNH graduate ACFI catalog, embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

#[async_trait]
impl CorpusSource for BuiltinCatalog {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn fetch(&self) -> Result<Vec<CourseRecord>> {
        parse_catalog(BUILTIN_CATALOG).context("built-in catalog is malformed")
    }
}

/// Catalog JSON on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusSource for JsonFileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<CourseRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog file: {}", self.path.display()))?;
        parse_catalog(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", self.path.display()))
    }
}

/// Pick the loader named by `corpus.source`.
///
/// `load_config` has already validated the source name and path, so an
/// unrecognised value here falls back to the built-in catalog.
pub fn source_from_config(config: &Config) -> Box<dyn CorpusSource> {
    match (config.corpus.source.as_str(), &config.corpus.path) {
        ("file", Some(path)) => Box::new(JsonFileSource::new(path.clone())),
        _ => Box::new(BuiltinCatalog),
    }
}
