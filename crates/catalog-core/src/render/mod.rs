//! Presentation adapters for [`Response`].
//!
//! Each [`OutputFormat`] turns the same structured response into a string:
//! HTML course cards for the browser chat window, labeled plain text for
//! terminals, or JSON for programmatic consumers.

mod html;
mod text;

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::respond::Response;

pub(crate) const NO_CATEGORY_COURSES: &str = "No courses found for this category.";
pub(crate) const NEED_TWO_COURSES: &str = "Please specify at least two courses to compare.";
pub(crate) const NO_PREREQUISITES: &str = "Most ACFI courses do not have specific prerequisites \
    listed. However, some advanced courses may require foundational knowledge.";
pub(crate) const CREDIT_NOTE: &str = "Most ACFI courses are 3 credits and use Letter Grading. \
    Some courses may be repeated for additional credits.";
pub(crate) const HELP_INTRO: &str =
    "I'm not sure about that specific question. Here are some things you can try:";
pub(crate) const HELP_SUGGESTIONS: [&str; 4] = [
    "Try asking about a specific course like 'ACFI 801' or 'Corporate Finance'",
    "Ask 'List all courses' to see all available ACFI courses",
    "Ask about prerequisites or course requirements",
    "Search by topic like 'international', 'derivatives', or 'accounting'",
];
pub(crate) const HELP_OUTRO: &str = "Feel free to ask me anything about ACFI courses at UNH!";
pub(crate) const APOLOGY: &str = "I'm sorry, I encountered an error processing your request. \
    Please try asking your question differently or contact support if the problem persists.";
pub(crate) const APOLOGY_SUGGESTIONS: [&str; 3] = [
    "Asking about specific course codes (e.g., \"ACFI 801\")",
    "Requesting course lists by category",
    "Searching for topics like \"derivatives\" or \"accounting\"",
];

pub(crate) fn not_found_message(code: &str) -> String {
    format!(
        "I couldn't find information about {}. Please check the course code and try again.",
        code
    )
}

pub(crate) fn no_topic_message(topic: &str) -> String {
    format!(
        "No courses found specifically related to \"{}\". Try asking about specific course codes or browse all courses.",
        topic
    )
}

/// Output encoding for rendered answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Render a response in this format.
    ///
    /// Only JSON serialization can fail; callers treat a failure as an
    /// unexpected condition and fall back to [`OutputFormat::apology`].
    pub fn render(&self, response: &Response<'_>) -> Result<String> {
        match self {
            OutputFormat::Html => Ok(html::render(response)),
            OutputFormat::Text => Ok(text::render(response)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(response).context("failed to serialize response")
            }
        }
    }

    /// Generic apology shown when a query could not be answered.
    pub fn apology(&self) -> String {
        match self {
            OutputFormat::Html => html::apology(),
            OutputFormat::Text => text::apology(),
            OutputFormat::Json => serde_json::json!({
                "type": "error",
                "message": APOLOGY,
            })
            .to_string(),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}': expected html, text, or json",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseRecord, Credits};
    use crate::respond::CreditCount;

    fn course() -> CourseRecord {
        let mut c = CourseRecord::new(
            "ACFI 804",
            "Derivative Securities and Markets",
            Credits::Fixed(3),
            "Forwards, futures, options, swaps.",
        );
        c.prerequisites = Some("ACFI 801 with a minimum grade of B-.".to_string());
        c.equivalent = Some("ACFI 897".to_string());
        c
    }

    #[test]
    fn test_detail_fields_present_only_when_set() {
        let c = course();
        let resp = Response::CourseDetail { course: &c };
        for format in [OutputFormat::Html, OutputFormat::Text] {
            let out = format.render(&resp).unwrap();
            assert!(out.contains("Derivative Securities and Markets"));
            assert!(out.contains("Prerequisites:"));
            assert!(out.contains("Equivalent:"));
            assert!(out.contains("Grade Mode:"));
            assert!(!out.contains("Repeat Rule:"), "{} output: {}", format, out);
            assert!(!out.contains("Mutual Exclusion:"));
        }
    }

    #[test]
    fn test_html_escapes_text() {
        let mut c = course();
        c.title = "Tax Planning & Research".to_string();
        let out = OutputFormat::Html
            .render(&Response::CourseDetail { course: &c })
            .unwrap();
        assert!(out.contains("Tax Planning &amp; Research"));
        assert!(out.contains("class=\"course-card\""));
    }

    #[test]
    fn test_json_is_tagged() {
        let c = course();
        let out = OutputFormat::Json
            .render(&Response::Related { courses: vec![&c] })
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["type"], "related");
        assert_eq!(v["courses"][0]["code"], "ACFI 804");
        assert_eq!(v["courses"][0]["gradeMode"], "Letter Grading");
    }

    #[test]
    fn test_credit_summary_text() {
        let resp = Response::CreditSummary {
            distribution: vec![
                CreditCount {
                    credits: Credits::Fixed(3),
                    count: 23,
                },
                CreditCount {
                    credits: Credits::Range("1-6".to_string()),
                    count: 1,
                },
            ],
        };
        let out = OutputFormat::Text.render(&resp).unwrap();
        assert!(out.contains("3 credits: 23 courses"));
        assert!(out.contains("1-6 credits: 1 courses"));
        assert!(out.contains(CREDIT_NOTE));
    }

    #[test]
    fn test_empty_list_notice() {
        let resp = Response::CourseList {
            heading: "Finance-Related Courses",
            courses: vec![],
        };
        let out = OutputFormat::Text.render(&resp).unwrap();
        assert!(out.contains(NO_CATEGORY_COURSES));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!("xml".parse::<OutputFormat>().is_err());
        let v: serde_json::Value = serde_json::from_str(&OutputFormat::Json.apology()).unwrap();
        assert_eq!(v["type"], "error");
    }
}
