//! Plain-text rendering with labeled lines, for terminals and logs.

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
        Response::CourseDetail { course } => detail(&mut out, course),
        Response::CourseNotFound { code } => out.push_str(&not_found_message(code)),
        Response::CourseList { heading, courses } => {
            let _ = writeln!(out, "{}:", heading);
            if courses.is_empty() {
                out.push_str(NO_CATEGORY_COURSES);
            }
            cards(&mut out, courses, summary);
        }
        Response::Comparison { courses } => {
            out.push_str("Course Comparison:\n");
            cards(&mut out, courses, detail);
        }
        Response::ComparisonNeedsTwo => out.push_str(NEED_TWO_COURSES),
        Response::Prerequisites { courses } => {
            out.push_str("Courses with Prerequisites:\n");
            cards(&mut out, courses, |out, course| {
                title_line(out, course);
                if let Some(p) = &course.prerequisites {
                    let _ = writeln!(out, "  Prerequisites: {}", p);
                }
            });
        }
        Response::NoPrerequisites => out.push_str(NO_PREREQUISITES),
        Response::Topic { topic, courses } => {
            if courses.is_empty() {
                out.push_str(&no_topic_message(topic));
            } else {
                let _ = writeln!(out, "Courses related to \"{}\":", topic);
                cards(&mut out, courses, summary);
            }
        }
        Response::CreditSummary { distribution } => {
            out.push_str("Course Information Summary:\n");
            out.push_str("Credit Distribution:\n");
            for bucket in distribution {
                let _ = writeln!(out, "  - {} credits: {} courses", bucket.credits, bucket.count);
            }
            out.push_str(CREDIT_NOTE);
        }
        Response::Related { courses } => {
            out.push_str("Related Information:\n");
            cards(&mut out, courses, summary);
        }
        Response::Help => {
            let _ = writeln!(out, "{}", HELP_INTRO);
            for s in HELP_SUGGESTIONS {
                let _ = writeln!(out, "  - {}", s);
            }
            out.push_str(HELP_OUTRO);
        }
    }
    out.trim_end().to_string()
}

pub(super) fn apology() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", APOLOGY);
    out.push_str("You can try:\n");
    for s in APOLOGY_SUGGESTIONS {
        let _ = writeln!(out, "  - {}", s);
    }
    out.trim_end().to_string()
}

/// Write each course with `f`, separated by blank lines.
fn cards(out: &mut String, courses: &[&CourseRecord], f: impl Fn(&mut String, &CourseRecord)) {
    for (i, course) in courses.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        f(&mut *out, *course);
    }
}

fn title_line(out: &mut String, course: &CourseRecord) {
    let _ = writeln!(out, "{} - {}", course.code, course.title);
}

fn summary(out: &mut String, course: &CourseRecord) {
    title_line(out, course);
    let _ = writeln!(out, "  Credits: {}", course.credits);
    let _ = writeln!(out, "  {}", course.description);
}

fn detail(out: &mut String, course: &CourseRecord) {
    summary(out, course);
    if let Some(p) = &course.prerequisites {
        let _ = writeln!(out, "  Prerequisites: {}", p);
    }
    if let Some(r) = &course.repeat_rule {
        let _ = writeln!(out, "  Repeat Rule: {}", r);
    }
    if let Some(m) = &course.mutual_exclusion {
        let _ = writeln!(out, "  Mutual Exclusion: {}", m);
    }
    if let Some(e) = &course.equivalent {
        let _ = writeln!(out, "  Equivalent: {}", e);
    }
    let _ = writeln!(out, "  Grade Mode: {}", course.grade_mode);
}
