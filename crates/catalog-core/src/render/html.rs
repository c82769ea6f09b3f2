//! HTML course-card markup for the chat window.

use std::fmt::Write;

use crate::models::CourseRecord;
use crate::respond::Response;

use super::{
    no_topic_message, not_found_message, APOLOGY, APOLOGY_SUGGESTIONS, CREDIT_NOTE, HELP_INTRO,
    HELP_OUTRO, HELP_SUGGESTIONS, NEED_TWO_COURSES, NO_CATEGORY_COURSES, NO_PREREQUISITES,
};

pub(super) fn render(response: &Response<'_>) -> String {
    let mut out = String::new();
    match response {
        Response::CourseDetail { course } => detail_card(&mut out, course),
        Response::CourseNotFound { code } => out.push_str(&escape(&not_found_message(code))),
        Response::CourseList { heading, courses } => {
            heading_tag(&mut out, heading);
            if courses.is_empty() {
                paragraph(&mut out, NO_CATEGORY_COURSES);
            }
            for course in courses {
                summary_card(&mut out, course);
            }
        }
        Response::Comparison { courses } => {
            heading_tag(&mut out, "Course Comparison");
            for course in courses {
                detail_card(&mut out, course);
            }
        }
        Response::ComparisonNeedsTwo => out.push_str(NEED_TWO_COURSES),
        Response::Prerequisites { courses } => {
            heading_tag(&mut out, "Courses with Prerequisites");
            for course in courses {
                out.push_str("<div class=\"course-card\">");
                title_div(&mut out, course);
                out.push_str("<div class=\"course-details\">");
                if let Some(p) = &course.prerequisites {
                    labeled(&mut out, "Prerequisites", p);
                }
                out.push_str("</div></div>");
            }
        }
        Response::NoPrerequisites => paragraph(&mut out, NO_PREREQUISITES),
        Response::Topic { topic, courses } => {
            if courses.is_empty() {
                paragraph(&mut out, &no_topic_message(topic));
            } else {
                heading_tag(&mut out, &format!("Courses related to \"{}\"", topic));
                for course in courses {
                    summary_card(&mut out, course);
                }
            }
        }
        Response::CreditSummary { distribution } => {
            heading_tag(&mut out, "Course Information Summary");
            out.push_str("<h4>Credit Distribution:</h4><ul>");
            for bucket in distribution {
                let _ = write!(
                    out,
                    "<li><strong>{} credits:</strong> {} courses</li>",
                    escape(&bucket.credits.to_string()),
                    bucket.count
                );
            }
            out.push_str("</ul>");
            paragraph(&mut out, CREDIT_NOTE);
        }
        Response::Related { courses } => {
            heading_tag(&mut out, "Related Information");
            for course in courses {
                summary_card(&mut out, course);
            }
        }
        Response::Help => {
            paragraph(&mut out, HELP_INTRO);
            list(&mut out, &HELP_SUGGESTIONS);
            paragraph(&mut out, HELP_OUTRO);
        }
    }
    out
}

pub(super) fn apology() -> String {
    let mut out = String::new();
    paragraph(&mut out, APOLOGY);
    paragraph(&mut out, "You can try:");
    list(&mut out, &APOLOGY_SUGGESTIONS);
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn heading_tag(out: &mut String, text: &str) {
    let _ = write!(out, "<h3>{}:</h3>", escape(text));
}

fn paragraph(out: &mut String, text: &str) {
    let _ = write!(out, "<p>{}</p>", escape(text));
}

fn list(out: &mut String, items: &[&str]) {
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>");
}

fn labeled(out: &mut String, label: &str, value: &str) {
    let _ = write!(out, "<p><strong>{}:</strong> {}</p>", label, escape(value));
}

fn title_div(out: &mut String, course: &CourseRecord) {
    let _ = write!(
        out,
        "<div class=\"course-title\">{} - {}</div>",
        escape(&course.code),
        escape(&course.title)
    );
}

fn card_header(out: &mut String, course: &CourseRecord) {
    title_div(out, course);
    let _ = write!(
        out,
        "<div class=\"course-credits\">Credits: {}</div><div class=\"course-description\">{}</div>",
        escape(&course.credits.to_string()),
        escape(&course.description)
    );
}

fn summary_card(out: &mut String, course: &CourseRecord) {
    out.push_str("<div class=\"course-card\">");
    card_header(out, course);
    out.push_str("</div>");
}

fn detail_card(out: &mut String, course: &CourseRecord) {
    out.push_str("<div class=\"course-card\">");
    card_header(out, course);
    out.push_str("<div class=\"course-details\">");
    if let Some(p) = &course.prerequisites {
        labeled(out, "Prerequisites", p);
    }
    if let Some(r) = &course.repeat_rule {
        labeled(out, "Repeat Rule", r);
    }
    if let Some(m) = &course.mutual_exclusion {
        labeled(out, "Mutual Exclusion", m);
    }
    if let Some(e) = &course.equivalent {
        labeled(out, "Equivalent", e);
    }
    labeled(out, "Grade Mode", &course.grade_mode);
    out.push_str("</div></div>");
}
