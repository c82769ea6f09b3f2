//! End-to-end tests for the query pipeline: source → corpus → index →
//! classify → respond → render → transcript.

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{bail, Result};
use async_trait::async_trait;
use catalog_core::models::{CourseRecord, Credits};
use catalog_core::session::Role;
use catalog_core::source::{CorpusSource, StaticSource};
use catalog_core::{Assistant, OutputFormat};
use serde_json::Value;

// ─── Fixtures ───────────────────────────────────────────────────────

fn corporate_finance() -> CourseRecord {
    CourseRecord::new(
        "ACFI 801",
        "Corporate Finance",
        Credits::Fixed(3),
        "Investment criteria, capital structure, valuation and payout policy.",
    )
}

fn derivatives() -> CourseRecord {
    let mut c = CourseRecord::new(
        "ACFI 804",
        "Derivative Securities and Markets",
        Credits::Fixed(3),
        "Forwards, futures, options and swaps.",
    );
    c.prerequisites = Some("ACFI 801 with a minimum grade of B-.".to_string());
    c.repeat_rule = Some("May be repeated for a maximum of 6 credits.".to_string());
    c
}

fn auditing() -> CourseRecord {
    CourseRecord::new(
        "ACFI 830",
        "Advanced Auditing",
        Credits::Fixed(3),
        "Auditing theory and practice through case studies.",
    )
}

fn three_courses() -> Vec<CourseRecord> {
    vec![corporate_finance(), derivatives(), auditing()]
}

async fn ready(records: Vec<CourseRecord>, format: OutputFormat) -> Assistant<StaticSource> {
    let mut assistant = Assistant::new(StaticSource::new(records)).with_format(format);
    assert!(assistant.initialize().await);
    assistant
}

fn json(answer: &str) -> Value {
    serde_json::from_str(answer).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, answer))
}

fn course_codes(v: &Value) -> Vec<String> {
    v["courses"]
        .as_array()
        .expect("courses array")
        .iter()
        .map(|c| c["code"].as_str().unwrap().to_string())
        .collect()
}

/// Fails on the `fail_on`-th fetch (zero-based), succeeds on every other.
struct FlakySource {
    calls: AtomicUsize,
    fail_on: usize,
}

impl FlakySource {
    fn failing_on(fail_on: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on,
        }
    }
}

#[async_trait]
impl CorpusSource for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn fetch(&self) -> Result<Vec<CourseRecord>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == self.fail_on {
            bail!("catalog temporarily unavailable");
        }
        Ok(three_courses())
    }
}

struct BrokenSource;

#[async_trait]
impl CorpusSource for BrokenSource {
    fn name(&self) -> &str {
        "broken"
    }

    async fn fetch(&self) -> Result<Vec<CourseRecord>> {
        bail!("connection refused")
    }
}

// ─── Scenarios ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_specific_course_without_prerequisites() {
    let mut assistant = ready(vec![corporate_finance()], OutputFormat::Text).await;
    let answer = assistant.process_query("Tell me about ACFI 801").await;
    assert!(answer.contains("Corporate Finance"), "{}", answer);
    assert!(answer.contains("Credits: 3"), "{}", answer);
    assert!(!answer.contains("Prerequisites"), "{}", answer);
    assert!(answer.contains("Grade Mode: Letter Grading"));
}

#[tokio::test]
async fn test_list_all_courses_exactly_once() {
    let mut assistant = ready(three_courses(), OutputFormat::Json).await;
    let v = json(&assistant.process_query("list all courses").await);
    assert_eq!(v["type"], "course_list");
    assert_eq!(v["heading"], "All ACFI Courses");
    assert_eq!(course_codes(&v), vec!["ACFI 801", "ACFI 804", "ACFI 830"]);
}

#[tokio::test]
async fn test_topic_search_single_match() {
    let mut assistant = ready(three_courses(), OutputFormat::Json).await;
    let v = json(&assistant.process_query("derivative").await);
    assert_eq!(v["type"], "topic");
    assert_eq!(v["topic"], "derivative");
    assert_eq!(course_codes(&v), vec!["ACFI 804"]);
}

#[tokio::test]
async fn test_comparison_of_two_codes() {
    let mut assistant = ready(three_courses(), OutputFormat::Json).await;
    let v = json(
        &assistant
            .process_query("compare ACFI 801 and ACFI 830")
            .await,
    );
    assert_eq!(v["type"], "comparison");
    assert_eq!(course_codes(&v), vec!["ACFI 801", "ACFI 830"]);
}

#[tokio::test]
async fn test_one_code_with_compare_is_specific() {
    let mut assistant = ready(three_courses(), OutputFormat::Json).await;
    let v = json(&assistant.process_query("compare ACFI 804").await);
    assert_eq!(v["type"], "course_detail");
    assert_eq!(v["course"]["code"], "ACFI 804");
    assert_eq!(v["course"]["repeatRule"], "May be repeated for a maximum of 6 credits.");
}

#[tokio::test]
async fn test_every_branch_on_empty_corpus() {
    let mut assistant = Assistant::new(BrokenSource).with_format(OutputFormat::Text);
    assert!(!assistant.initialize().await);

    let cases = [
        ("Tell me about ACFI 801", "couldn't find information about ACFI 801"),
        ("list all courses", "No courses found for this category."),
        ("compare ACFI 801 and ACFI 802", "Course Comparison"),
        ("compare them", "at least two courses"),
        ("any prerequisites?", "do not have specific prerequisites"),
        ("derivative", "No courses found specifically related to \"derivative\""),
        ("how many credits", "Credit Distribution"),
        ("something unrelated", "I'm not sure about that specific question"),
    ];
    for (query, expected) in cases {
        let answer = assistant.process_query(query).await;
        assert!(
            answer.contains(expected),
            "query {:?} gave {:?}",
            query,
            answer
        );
    }
    assert_eq!(assistant.status().total_courses, 0);
    assert_eq!(assistant.history().len(), cases.len() * 2);
}

#[tokio::test]
async fn test_empty_record_list_is_rejected() {
    let mut assistant = Assistant::new(StaticSource::new(Vec::new()));
    assert!(!assistant.initialize().await);
    assert!(!assistant.is_initialized());
    let answer = assistant.process_query("list all courses").await;
    assert!(answer.contains("No courses found"));
}

#[tokio::test]
async fn test_failed_initialization_is_retried() {
    let mut assistant = Assistant::new(FlakySource::failing_on(0));

    let first = assistant.process_query("Tell me about ACFI 830").await;
    assert!(first.contains("couldn't find"), "{}", first);
    assert!(!assistant.is_initialized());

    let second = assistant.process_query("Tell me about ACFI 830").await;
    assert!(second.contains("Advanced Auditing"), "{}", second);
    assert!(assistant.is_initialized());
    assert_eq!(assistant.status().total_courses, 3);
}

#[tokio::test]
async fn test_failed_reload_resets_state_and_is_retried() {
    let mut assistant = Assistant::new(FlakySource::failing_on(1));
    assert!(assistant.initialize().await);
    assert!(assistant.status().last_loaded.is_some());

    assert!(!assistant.initialize().await);
    let status = assistant.status();
    assert!(!status.initialized);
    assert!(status.last_loaded.is_none());
    assert_eq!(status.total_courses, 0);
    assert_eq!(status.total_documents, 0);

    let answer = assistant.process_query("Tell me about ACFI 830").await;
    assert!(answer.contains("Advanced Auditing"), "{}", answer);
    assert!(assistant.is_initialized());
    assert_eq!(assistant.status().total_courses, 3);
}

#[tokio::test]
async fn test_rejected_reload_clears_last_loaded() {
    let mut assistant = ready(three_courses(), OutputFormat::Text).await;
    assert!(assistant.load(Vec::new()).is_err());
    let status = assistant.status();
    assert!(!status.initialized);
    assert!(status.last_loaded.is_none());
    assert_eq!(status.total_courses, 0);
}

#[tokio::test]
async fn test_lazy_initialization_on_first_query() {
    let mut assistant = Assistant::new(StaticSource::new(three_courses()));
    assert!(!assistant.is_initialized());
    let answer = assistant.process_query("list all courses").await;
    assert!(assistant.is_initialized());
    assert!(answer.contains("ACFI 830 - Advanced Auditing"));
}

#[tokio::test]
async fn test_ranking_is_idempotent() {
    let mut assistant = ready(three_courses(), OutputFormat::Text).await;
    let first = assistant.search("capital structure valuation", 5);
    let second = assistant.search("capital structure valuation", 5);
    assert_eq!(first, second);
    assert!(first.len() <= 5);
    assert!(first.windows(2).all(|w| w[0].similarity >= w[1].similarity));

    let a = assistant.process_query("capital structure valuation").await;
    let b = assistant.process_query("capital structure valuation").await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_transcript_records_deduplicated_sources() {
    let mut assistant = ready(three_courses(), OutputFormat::Text).await;
    assistant.process_query("Tell me about ACFI 804").await;

    let history = assistant.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[0].content, "Tell me about ACFI 804");
    assert_eq!(history[1].role, Role::Assistant);
    let sources = &history[1].sources;
    assert_eq!(sources.first().map(String::as_str), Some("ACFI 804"));
    let mut deduped = sources.clone();
    deduped.dedup();
    assert_eq!(&deduped, sources);

    assistant.clear_history();
    assert!(assistant.history().is_empty());
}

#[tokio::test]
async fn test_html_output_uses_course_cards() {
    let mut assistant = ready(three_courses(), OutputFormat::Html).await;
    let answer = assistant.process_query("Tell me about ACFI 804").await;
    assert!(answer.contains("<div class=\"course-card\">"));
    assert!(answer.contains("<strong>Prerequisites:</strong>"));
}

#[tokio::test]
async fn test_status_reports_corpus() {
    let assistant = ready(three_courses(), OutputFormat::Text).await;
    let status = assistant.status();
    assert!(status.initialized);
    assert_eq!(status.source, "static");
    assert_eq!(status.total_courses, 3);
    // 801: 2 docs, 804: 4 docs, 830: 2 docs
    assert_eq!(status.total_documents, 8);
    assert!(status.vocabulary_size > 0);
    assert!(status.corpus_digest.is_some());
    assert!(status.last_loaded.is_some());
    assert!(assistant.greeting().starts_with("Hello!"));
}
