//! Response assembly: intent + retrieved hits → structured [`Response`].
//!
//! Responses carry data only (which courses, which message variant). Markup
//! is produced separately by [`render`](crate::render).

use serde::Serialize;

use crate::corpus::{normalize_code, Category, CorpusStore};
use crate::intent::Intent;
use crate::models::{CourseRecord, Credits, DocumentKind, RetrievalHit};
use crate::search::unique_courses;

/// How many top hits the semantic fallback looks at.
const SEMANTIC_TOP_HITS: usize = 3;

/// One bucket of the credit distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditCount {
    pub credits: Credits,
    pub count: usize,
}

/// Structured answer to a query.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response<'a> {
    /// Full detail for one course.
    CourseDetail { course: &'a CourseRecord },
    /// A specifically requested code was not retrieved.
    CourseNotFound { code: String },
    /// Titled list of course cards; may be empty.
    CourseList {
        heading: &'static str,
        courses: Vec<&'a CourseRecord>,
    },
    /// Full detail for each compared course that exists.
    Comparison { courses: Vec<&'a CourseRecord> },
    /// Fewer than two codes were given to compare.
    ComparisonNeedsTwo,
    Prerequisites { courses: Vec<&'a CourseRecord> },
    NoPrerequisites,
    /// Courses whose retrieved text mentions the topic; may be empty.
    Topic {
        topic: String,
        courses: Vec<&'a CourseRecord>,
    },
    CreditSummary { distribution: Vec<CreditCount> },
    /// Summary cards for several related courses.
    Related { courses: Vec<&'a CourseRecord> },
    /// Suggestions shown when nothing was retrieved.
    Help,
}

/// Build the response for `intent` from retrieved `hits`.
///
/// Pure: reads `hits` and `corpus`, never mutates anything.
pub fn respond<'a>(
    intent: &Intent,
    hits: &[RetrievalHit<'a>],
    corpus: &'a CorpusStore,
) -> Response<'a> {
    match intent {
        Intent::SpecificCourse { code } => specific_course(code, hits),
        Intent::ListCourses { category } => course_list(*category, corpus),
        Intent::Comparison { codes } => comparison(codes, corpus),
        Intent::Prerequisites => prerequisites(hits),
        Intent::TopicSearch { topic } => topic_search(topic, hits),
        Intent::GeneralInfo => credit_summary(corpus),
        Intent::SemanticSearch => semantic(hits),
    }
}

fn specific_course<'a>(code: &str, hits: &[RetrievalHit<'a>]) -> Response<'a> {
    match hits
        .iter()
        .find(|hit| normalize_code(&hit.source_code) == code)
    {
        Some(hit) => Response::CourseDetail { course: hit.course },
        None => Response::CourseNotFound {
            code: code.to_string(),
        },
    }
}

fn course_list(category: Option<Category>, corpus: &CorpusStore) -> Response<'_> {
    match category {
        Some(Category::Finance) => Response::CourseList {
            heading: "Finance-Related Courses",
            courses: corpus.by_category(Category::Finance),
        },
        Some(Category::Accounting) => Response::CourseList {
            heading: "Accounting-Related Courses",
            courses: corpus.by_category(Category::Accounting),
        },
        None => Response::CourseList {
            heading: "All ACFI Courses",
            courses: corpus.all().collect(),
        },
    }
}

fn comparison<'a>(codes: &[String], corpus: &'a CorpusStore) -> Response<'a> {
    if codes.len() < 2 {
        return Response::ComparisonNeedsTwo;
    }
    Response::Comparison {
        courses: codes.iter().filter_map(|raw| corpus.get(raw)).collect(),
    }
}

fn prerequisites<'a>(hits: &[RetrievalHit<'a>]) -> Response<'a> {
    let courses = unique_courses(
        hits.iter()
            .filter(|hit| hit.kind == DocumentKind::Prerequisites),
    );
    if courses.is_empty() {
        Response::NoPrerequisites
    } else {
        Response::Prerequisites { courses }
    }
}

fn topic_search<'a>(topic: &str, hits: &[RetrievalHit<'a>]) -> Response<'a> {
    let needle = topic.to_lowercase();
    let courses = unique_courses(
        hits.iter()
            .filter(|hit| hit.text.to_lowercase().contains(&needle)),
    );
    Response::Topic {
        topic: topic.to_string(),
        courses,
    }
}

fn credit_summary(corpus: &CorpusStore) -> Response<'_> {
    let mut distribution: Vec<CreditCount> = Vec::new();
    for course in corpus.all() {
        match distribution.iter_mut().find(|c| c.credits == course.credits) {
            Some(bucket) => bucket.count += 1,
            None => distribution.push(CreditCount {
                credits: course.credits.clone(),
                count: 1,
            }),
        }
    }
    // Fixed values ascending, then ranges in first-seen order (stable sort).
    distribution.sort_by_key(|c| match c.credits {
        Credits::Fixed(n) => (0, n),
        Credits::Range(_) => (1, 0),
    });
    Response::CreditSummary { distribution }
}

fn semantic<'a>(hits: &[RetrievalHit<'a>]) -> Response<'a> {
    if hits.is_empty() {
        return Response::Help;
    }
    let courses = unique_courses(hits.iter().take(SEMANTIC_TOP_HITS));
    if courses.len() == 1 {
        Response::CourseDetail { course: courses[0] }
    } else {
        Response::Related { courses }
    }
}
