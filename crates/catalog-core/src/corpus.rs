//! In-memory course corpus.
//!
//! [`CorpusStore`] owns every [`CourseRecord`] for the session. Other
//! components hold records by reference or by code; nothing outside this
//! module mutates them.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::CorpusError;
use crate::models::CourseRecord;

/// Case-insensitive course code pattern: `ACFI`, optional whitespace, three digits.
pub(crate) fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)acfi\s*(\d{3})").expect("valid course code regex"))
}

/// Normalize a user-supplied course code for lookup.
///
/// Anything matching the course code pattern becomes `"ACFI ddd"`
/// (so `acfi801` and `ACFI  801` both resolve). Other input is
/// uppercased with whitespace runs collapsed.
pub fn normalize_code(raw: &str) -> String {
    if let Some(caps) = code_pattern().captures(raw) {
        return format!("ACFI {}", &caps[1]);
    }
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Keyword-defined course categories used by list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Finance,
    Accounting,
}

impl Category {
    /// Keywords matched against `title + description`.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Finance => &[
                "finance",
                "investment",
                "corporate",
                "derivative",
                "portfolio",
                "valuation",
                "capital",
                "securities",
                "markets",
            ],
            Category::Accounting => &[
                "accounting",
                "audit",
                "financial reporting",
                "tax",
                "governmental",
                "non-profit",
                "fraud",
                "ethics",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Finance => "finance",
            Category::Accounting => "accounting",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "finance" => Ok(Category::Finance),
            "accounting" => Ok(Category::Accounting),
            other => Err(format!(
                "unknown category '{}': expected finance or accounting",
                other
            )),
        }
    }
}

/// Insertion-ordered course store keyed by normalized code.
#[derive(Debug, Default)]
pub struct CorpusStore {
    records: Vec<CourseRecord>,
    by_code: HashMap<String, usize>,
}

impl CorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store contents with `records`.
    ///
    /// Every record is validated before anything is stored. On error the
    /// store is left empty. A repeated code overwrites the earlier record
    /// but keeps its position.
    pub fn load(&mut self, records: Vec<CourseRecord>) -> Result<usize, CorpusError> {
        self.clear();

        if records.is_empty() {
            return Err(CorpusError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            if record.code.trim().is_empty() {
                return Err(CorpusError::MissingField {
                    index,
                    field: "code",
                });
            }
            if record.title.trim().is_empty() {
                return Err(CorpusError::MissingField {
                    index,
                    field: "title",
                });
            }
        }

        for record in records {
            let key = normalize_code(&record.code);
            match self.by_code.get(&key) {
                Some(&pos) => self.records[pos] = record,
                None => {
                    self.by_code.insert(key, self.records.len());
                    self.records.push(record);
                }
            }
        }
        Ok(self.records.len())
    }

    /// Look up a course by code. Case and spacing are normalized first.
    pub fn get(&self, code: &str) -> Option<&CourseRecord> {
        self.by_code
            .get(&normalize_code(code))
            .map(|&pos| &self.records[pos])
    }

    /// All courses in load order.
    pub fn all(&self) -> impl Iterator<Item = &CourseRecord> {
        self.records.iter()
    }

    /// Courses whose title or description mentions any keyword of `category`.
    pub fn by_category(&self, category: Category) -> Vec<&CourseRecord> {
        let keywords = category.keywords();
        self.records
            .iter()
            .filter(|course| {
                let haystack = format!("{} {}", course.title, course.description).to_lowercase();
                keywords.iter().any(|kw| haystack.contains(kw))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.by_code.clear();
    }

    /// SHA-256 fingerprint of the loaded records, or `None` when empty.
    pub fn digest(&self) -> Option<String> {
        if self.records.is_empty() {
            return None;
        }
        let mut hasher = Sha256::new();
        for r in &self.records {
            for field in [
                Some(r.code.as_str()),
                Some(r.title.as_str()),
                Some(r.description.as_str()),
                Some(r.grade_mode.as_str()),
                r.prerequisites.as_deref(),
                r.repeat_rule.as_deref(),
                r.mutual_exclusion.as_deref(),
                r.equivalent.as_deref(),
            ] {
                hasher.update(field.unwrap_or("").as_bytes());
                hasher.update([0u8]);
            }
            hasher.update(r.credits.to_string().as_bytes());
            hasher.update([0xffu8]);
        }
        Some(format!("{:x}", hasher.finalize()))
    }
}
