//! Rule-based query intent classification.
//!
//! Rules are tested in a fixed priority order and the first match wins:
//!
//! 1. exactly one course code → [`Intent::SpecificCourse`]
//! 2. "list" with "course"/"all" → [`Intent::ListCourses`]
//! 3. two or more codes, or "compare"/"difference" → [`Intent::Comparison`]
//! 4. "prerequisite"/"prereq" → [`Intent::Prerequisites`]
//! 5. a topic keyword → [`Intent::TopicSearch`]
//! 6. "credit"/"hour"/"grade"/"repeat" → [`Intent::GeneralInfo`]
//! 7. otherwise → [`Intent::SemanticSearch`]
//!
//! A query naming one code together with "compare" is still a specific
//! course request, because rule 1 runs first.

use std::fmt;

use serde::Serialize;

use crate::corpus::{code_pattern, normalize_code, Category};

/// Topic vocabulary, in match priority order.
pub const TOPICS: [&str; 8] = [
    "derivative",
    "audit",
    "international",
    "tax",
    "finance",
    "accounting",
    "ethics",
    "fraud",
];

const GENERAL_INFO_KEYWORDS: [&str; 4] = ["credit", "hour", "grade", "repeat"];

/// Classified purpose of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// One course named by code, normalized to `"ACFI ddd"`.
    SpecificCourse { code: String },
    /// `None` lists every course.
    ListCourses { category: Option<Category> },
    /// Raw matched code substrings, possibly empty.
    Comparison { codes: Vec<String> },
    Prerequisites,
    TopicSearch { topic: &'static str },
    GeneralInfo,
    SemanticSearch,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SpecificCourse { .. } => "specific_course",
            Intent::ListCourses { .. } => "list_courses",
            Intent::Comparison { .. } => "comparison",
            Intent::Prerequisites => "prerequisites",
            Intent::TopicSearch { .. } => "topic_search",
            Intent::GeneralInfo => "general_info",
            Intent::SemanticSearch => "semantic_search",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::SpecificCourse { code } => write!(f, "specific_course({})", code),
            Intent::ListCourses { category } => write!(
                f,
                "list_courses({})",
                category.map(|c| c.as_str()).unwrap_or("all")
            ),
            Intent::Comparison { codes } => write!(f, "comparison([{}])", codes.join(", ")),
            Intent::TopicSearch { topic } => write!(f, "topic_search({})", topic),
            other => f.write_str(other.name()),
        }
    }
}

/// Classify a raw query.
///
/// # Example
///
/// ```rust
/// use catalog_core::intent::{classify, Intent};
///
/// assert_eq!(
///     classify("Tell me about acfi801"),
///     Intent::SpecificCourse { code: "ACFI 801".to_string() }
/// );
/// assert_eq!(classify("what are the prereqs?"), Intent::Prerequisites);
/// ```
pub fn classify(query: &str) -> Intent {
    let q = query.to_lowercase();
    let codes: Vec<String> = code_pattern()
        .find_iter(&q)
        .map(|m| m.as_str().to_string())
        .collect();

    if codes.len() == 1 {
        return Intent::SpecificCourse {
            code: normalize_code(&codes[0]),
        };
    }

    if q.contains("list") && (q.contains("course") || q.contains("all")) {
        let category = if q.contains("finance") {
            Some(Category::Finance)
        } else if q.contains("accounting") {
            Some(Category::Accounting)
        } else {
            None
        };
        return Intent::ListCourses { category };
    }

    if codes.len() > 1 || q.contains("compare") || q.contains("difference") {
        return Intent::Comparison { codes };
    }

    if q.contains("prerequisite") || q.contains("prereq") {
        return Intent::Prerequisites;
    }

    if let Some(topic) = TOPICS.iter().copied().find(|t| q.contains(t)) {
        return Intent::TopicSearch { topic };
    }

    if GENERAL_INFO_KEYWORDS.iter().any(|kw| q.contains(kw)) {
        return Intent::GeneralInfo;
    }

    Intent::SemanticSearch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_course() {
        assert_eq!(
            classify("ACFI 801"),
            Intent::SpecificCourse {
                code: "ACFI 801".to_string()
            }
        );
        assert_eq!(
            classify("what is acfi   804 about"),
            Intent::SpecificCourse {
                code: "ACFI 804".to_string()
            }
        );
    }

    #[test]
    fn test_single_code_beats_compare_keyword() {
        assert_eq!(
            classify("compare ACFI 801"),
            Intent::SpecificCourse {
                code: "ACFI 801".to_string()
            }
        );
    }

    #[test]
    fn test_two_codes_is_comparison() {
        assert_eq!(
            classify("compare ACFI 801 and ACFI 802"),
            Intent::Comparison {
                codes: vec!["acfi 801".to_string(), "acfi 802".to_string()]
            }
        );
        assert_eq!(
            classify("ACFI801 vs acfi 802"),
            Intent::Comparison {
                codes: vec!["acfi801".to_string(), "acfi 802".to_string()]
            }
        );
    }

    #[test]
    fn test_comparison_keyword_without_codes() {
        assert_eq!(
            classify("what's the difference between them"),
            Intent::Comparison { codes: vec![] }
        );
    }

    #[test]
    fn test_list_categories() {
        assert_eq!(
            classify("list all courses"),
            Intent::ListCourses { category: None }
        );
        assert_eq!(
            classify("List finance courses"),
            Intent::ListCourses {
                category: Some(Category::Finance)
            }
        );
        assert_eq!(
            classify("list accounting courses"),
            Intent::ListCourses {
                category: Some(Category::Accounting)
            }
        );
        // finance is checked before accounting
        assert_eq!(
            classify("list all finance and accounting"),
            Intent::ListCourses {
                category: Some(Category::Finance)
            }
        );
    }

    #[test]
    fn test_list_beats_comparison_for_multiple_codes() {
        assert_eq!(
            classify("list all courses like ACFI 801 and ACFI 802"),
            Intent::ListCourses { category: None }
        );
    }

    #[test]
    fn test_comparison_beats_prerequisites() {
        assert_eq!(
            classify("compare prerequisites"),
            Intent::Comparison { codes: vec![] }
        );
    }

    #[test]
    fn test_prerequisites() {
        assert_eq!(classify("Which courses have prerequisites?"), Intent::Prerequisites);
        assert_eq!(classify("prereq info"), Intent::Prerequisites);
    }

    #[test]
    fn test_topic_priority_order() {
        assert_eq!(
            classify("derivative"),
            Intent::TopicSearch { topic: "derivative" }
        );
        // "international" precedes "accounting" in the vocabulary
        assert_eq!(
            classify("international accounting"),
            Intent::TopicSearch {
                topic: "international"
            }
        );
        assert_eq!(classify("FRAUD"), Intent::TopicSearch { topic: "fraud" });
    }

    #[test]
    fn test_general_info() {
        assert_eq!(classify("how many credit hours?"), Intent::GeneralInfo);
        assert_eq!(classify("can I repeat a class"), Intent::GeneralInfo);
    }

    #[test]
    fn test_semantic_fallback() {
        assert_eq!(classify("portfolio management"), Intent::SemanticSearch);
        assert_eq!(classify(""), Intent::SemanticSearch);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            classify("list finance courses").to_string(),
            "list_courses(finance)"
        );
        assert_eq!(classify("hello").to_string(), "semantic_search");
    }
}
