//! Corpus and session status overview.
//!
//! Summarizes what the assistant has loaded: course and document counts,
//! vocabulary size, corpus fingerprint, and a per-category breakdown. Used
//! by `catalog status` and the `/status` chat command to confirm the
//! catalog loaded as expected.

use anyhow::Result;
use catalog_core::corpus::{Category, CorpusStore};
use catalog_core::render::OutputFormat;
use catalog_core::AssistantStatus;
use chrono::{DateTime, Utc};

use crate::assistant::ready_assistant;
use crate::config::Config;

/// Run the status command: load the corpus and print a summary.
pub async fn run_status(config: &Config, format: Option<OutputFormat>) -> Result<()> {
    let assistant = ready_assistant(config, format).await?;
    print_status(&assistant.status(), assistant.corpus(), assistant.format())
}

pub fn print_status(
    status: &AssistantStatus,
    corpus: &CorpusStore,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(status)?);
        return Ok(());
    }

    println!("Catalog Assistant Status");
    println!("========================");
    println!();
    println!("  Source:      {}", status.source);
    println!(
        "  Loaded:      {}",
        match status.last_loaded {
            Some(ts) if status.initialized => format_ts_relative(ts),
            _ => "not loaded".to_string(),
        }
    );
    println!(
        "  Digest:      {}",
        status
            .corpus_digest
            .as_deref()
            .map(|d| &d[..d.len().min(16)])
            .unwrap_or("-")
    );
    println!();
    println!("  Courses:     {}", status.total_courses);
    println!("  Documents:   {}", status.total_documents);
    println!("  Vocabulary:  {} terms", status.vocabulary_size);

    if !corpus.is_empty() {
        println!();
        println!("  By category:");
        println!("  {:<16} {:>8}", "CATEGORY", "COURSES");
        println!("  {}", "-".repeat(25));
        for category in [Category::Finance, Category::Accounting] {
            println!(
                "  {:<16} {:>8}",
                category.as_str(),
                corpus.by_category(category).len()
            );
        }
    }

    println!();
    println!("  Session:     {}", status.session_id);
    println!("  Transcript:  {} turns", status.conversation_length);
    println!();

    Ok(())
}

/// Format a timestamp as a relative time string (e.g. "3 hours ago").
fn format_ts_relative(ts: DateTime<Utc>) -> String {
    let delta = (Utc::now() - ts).num_seconds();

    if delta < 0 {
        return format_ts_iso(ts);
    }

    if delta < 60 {
        "just now".to_string()
    } else if delta < 3600 {
        let mins = delta / 60;
        format!("{} min{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if delta < 86400 {
        let hours = delta / 3600;
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else if delta < 86400 * 30 {
        let days = delta / 86400;
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    } else {
        format_ts_iso(ts)
    }
}

fn format_ts_iso(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_timestamps() {
        let now = Utc::now();
        assert_eq!(format_ts_relative(now), "just now");
        assert_eq!(format_ts_relative(now - Duration::minutes(1)), "1 min ago");
        assert_eq!(format_ts_relative(now - Duration::minutes(5)), "5 mins ago");
        assert_eq!(format_ts_relative(now - Duration::hours(2)), "2 hours ago");
        assert_eq!(format_ts_relative(now - Duration::days(1)), "1 day ago");

        let old = now - Duration::days(90);
        assert_eq!(format_ts_relative(old), old.format("%Y-%m-%d %H:%M").to_string());
    }
}
