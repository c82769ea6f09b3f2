//! Course record chunker.
//!
//! Splits a [`CourseRecord`] into short [`Document`]s, one per semantic
//! facet of the course, so each facet can be retrieved on its own.
//!
//! # Emitted documents
//!
//! | Kind | Condition | Text |
//! |------|-----------|------|
//! | description | always | `"{code} {title}: {description}"` |
//! | prerequisites | `prerequisites` set | `"Prerequisites for {code}: {prerequisites}"` |
//! | logistics | always | `"{code} is worth {credits} credits and uses {grade_mode}"` |
//! | rules | any rule set | `"Additional rules for {code}: ..."` |
//!
//! A record therefore yields between two and four documents.
//!
//! # Example
//!
//! ```rust
//! use catalog_core::chunk::chunk_course;
//! use catalog_core::models::{CourseRecord, Credits};
//!
//! let record = CourseRecord::new("ACFI 801", "Corporate Finance", Credits::Fixed(3), "Capital structure.");
//! let docs = chunk_course(&record);
//! assert_eq!(docs.len(), 2);
//! assert_eq!(docs[0].text, "ACFI 801 Corporate Finance: Capital structure.");
//! ```

use crate::models::{CourseRecord, Document, DocumentKind};

/// Split a course record into its retrievable documents.
///
/// Deterministic: the same record always yields the same documents in
/// the same order.
pub fn chunk_course(record: &CourseRecord) -> Vec<Document> {
    let code = &record.code;
    let mut docs = Vec::with_capacity(4);

    docs.push(make_document(
        record,
        DocumentKind::Description,
        format!("{} {}: {}", code, record.title, record.description),
    ));

    if let Some(prereqs) = &record.prerequisites {
        docs.push(make_document(
            record,
            DocumentKind::Prerequisites,
            format!("Prerequisites for {}: {}", code, prereqs),
        ));
    }

    docs.push(make_document(
        record,
        DocumentKind::Logistics,
        format!(
            "{} is worth {} credits and uses {}",
            code, record.credits, record.grade_mode
        ),
    ));

    if record.has_rules() {
        let mut parts: Vec<String> = Vec::new();
        if let Some(rule) = &record.repeat_rule {
            parts.push(rule.clone());
        }
        if let Some(excl) = &record.mutual_exclusion {
            parts.push(excl.clone());
        }
        if let Some(eq) = &record.equivalent {
            parts.push(format!("Equivalent to {}", eq));
        }
        docs.push(make_document(
            record,
            DocumentKind::Rules,
            format!("Additional rules for {}: {}", code, parts.join(" ")),
        ));
    }

    docs
}

/// Chunk every record, preserving corpus order then emission order.
pub fn chunk_all<'a>(records: impl IntoIterator<Item = &'a CourseRecord>) -> Vec<Document> {
    records.into_iter().flat_map(chunk_course).collect()
}

fn make_document(record: &CourseRecord, kind: DocumentKind, text: String) -> Document {
    Document {
        kind,
        text,
        source_code: record.code.clone(),
    }
}
