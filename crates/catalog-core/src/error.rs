//! Error types for corpus loading.

use thiserror::Error;

/// Reasons a corpus load is rejected.
///
/// A rejected load leaves the store empty; queries are still answered,
/// they just fall through to the "no results" branches.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    /// The loader supplied no records at all.
    #[error("corpus loader supplied no course records")]
    Empty,

    /// A record is missing a required field.
    #[error("course record #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}
