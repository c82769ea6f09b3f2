use anyhow::Result;
use catalog_core::intent::classify;
use catalog_core::render::OutputFormat;

use crate::assistant::ready_assistant;
use crate::config::Config;

/// Print raw ranked index hits, without the answer pipeline.
pub async fn run_search(config: &Config, query: &str, limit: Option<usize>) -> Result<()> {
    if query.trim().is_empty() {
        println!("No results.");
        return Ok(());
    }

    let limit = limit.unwrap_or(config.retrieval.default_top_k);
    if limit == 0 {
        anyhow::bail!("--limit must be >= 1");
    }

    let assistant = ready_assistant(config, None).await?;
    let hits = assistant.search(query, limit);

    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        let title = assistant
            .corpus()
            .get(&hit.source_code)
            .map(|c| c.title.as_str())
            .unwrap_or("(unknown)");
        println!(
            "{}. [{:.2}] {} / {}",
            i + 1,
            hit.similarity,
            hit.source_code,
            title
        );
        println!("    kind: {}", hit.kind);
        println!("    excerpt: \"{}\"", hit.text.replace('\n', " ").trim());
        println!();
    }

    Ok(())
}

/// Print how a query would be classified.
pub fn run_intent(query: &str, format: Option<OutputFormat>) -> Result<()> {
    let intent = classify(query);
    match format {
        Some(OutputFormat::Json) => println!("{}", serde_json::to_string_pretty(&intent)?),
        _ => println!("{}", intent),
    }
    Ok(())
}
