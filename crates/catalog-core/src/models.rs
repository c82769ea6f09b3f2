//! Core data models shared by every stage of the assistant.
//!
//! A [`CourseRecord`] is the unit of the corpus. Each record is split into
//! one to four [`Document`]s by the chunker, and each document is indexed
//! independently for retrieval.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Credit value of a course: either a fixed number of credits or a
/// textual range such as `"1-6"`.
///
/// Accepts a JSON number or string. An all-digit string such as `"3"`
/// is read as [`Credits::Fixed`], so it compares equal to the number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Credits {
    Fixed(u32),
    Range(String),
}

impl Credits {
    /// Parse a textual credit value.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = text.parse() {
                return Credits::Fixed(n);
            }
        }
        Credits::Range(text.to_string())
    }
}

impl<'de> Deserialize<'de> for Credits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u32),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Credits::Fixed(n),
            Raw::Text(text) => Credits::parse(&text),
        })
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credits::Fixed(n) => write!(f, "{}", n),
            Credits::Range(r) => f.write_str(r),
        }
    }
}

fn default_grade_mode() -> String {
    "Letter Grading".to_string()
}

/// Optional text field where a blank string means "not set".
fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// A single catalog entry, as supplied by a corpus loader.
///
/// Field names follow the catalog JSON (`repeatRule`, `gradeMode`, ...).
/// Records are never mutated after being loaded into the
/// [`CorpusStore`](crate::corpus::CorpusStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Course code, canonically `"ACFI ###"`.
    pub code: String,
    pub title: String,
    pub credits: Credits,
    pub description: String,
    #[serde(default = "default_grade_mode")]
    pub grade_mode: String,
    /// Free text; may reference other codes, grade minimums and
    /// concurrency notes.
    #[serde(default, deserialize_with = "non_blank")]
    pub prerequisites: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub repeat_rule: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub mutual_exclusion: Option<String>,
    /// Code of an equivalent course.
    #[serde(default, deserialize_with = "non_blank")]
    pub equivalent: Option<String>,
}

impl CourseRecord {
    /// Build a record with only the required fields set.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        credits: Credits,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits,
            description: description.into(),
            grade_mode: default_grade_mode(),
            prerequisites: None,
            repeat_rule: None,
            mutual_exclusion: None,
            equivalent: None,
        }
    }

    /// True if any of the repeat, exclusion or equivalence rules is set.
    pub fn has_rules(&self) -> bool {
        self.repeat_rule.is_some() || self.mutual_exclusion.is_some() || self.equivalent.is_some()
    }
}

/// Which part of a course record a [`Document`] was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Description,
    Prerequisites,
    Logistics,
    Rules,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Description => "description",
            DocumentKind::Prerequisites => "prerequisites",
            DocumentKind::Logistics => "logistics",
            DocumentKind::Rules => "rules",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A short natural-language excerpt derived from one course record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub text: String,
    /// Code of the owning [`CourseRecord`].
    pub source_code: String,
}

/// A retrieved document joined with the course it came from.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalHit<'a> {
    pub source_code: String,
    /// Cosine similarity in `[0.0, 1.0]`.
    pub similarity: f64,
    pub kind: DocumentKind,
    pub text: String,
    #[serde(skip)]
    pub course: &'a CourseRecord,
}
