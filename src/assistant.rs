//! Assistant construction from configuration.

use std::time::Duration;

use anyhow::Result;
use catalog_core::render::OutputFormat;
use catalog_core::source::CorpusSource;
use catalog_core::Assistant;
use tracing::warn;

use crate::config::Config;
use crate::loader::source_from_config;

/// The assistant as wired by the CLI: any configured loader, brute-force index.
pub type CatalogAssistant = Assistant<Box<dyn CorpusSource>>;

/// Build an uninitialized assistant. `format` overrides `output.format`.
pub fn build_assistant(config: &Config, format: Option<OutputFormat>) -> Result<CatalogAssistant> {
    let format = match format {
        Some(format) => format,
        None => config.output.output_format()?,
    };
    Ok(Assistant::new(source_from_config(config))
        .with_params(config.retrieval.search_params())
        .with_format(format))
}

/// Initialize within `corpus.init_timeout_secs`.
///
/// A timeout counts as a failed initialization: the assistant stays usable
/// against an empty corpus and retries on its next query.
pub async fn initialize(assistant: &mut CatalogAssistant, config: &Config) -> bool {
    let limit = Duration::from_secs(config.corpus.init_timeout_secs);
    match tokio::time::timeout(limit, assistant.initialize()).await {
        Ok(loaded) => loaded,
        Err(_) => {
            warn!(
                timeout_secs = config.corpus.init_timeout_secs,
                "corpus initialization timed out"
            );
            false
        }
    }
}

/// Build and initialize in one step, for the one-shot commands.
pub async fn ready_assistant(
    config: &Config,
    format: Option<OutputFormat>,
) -> Result<CatalogAssistant> {
    let mut assistant = build_assistant(config, format)?;
    initialize(&mut assistant, config).await;
    Ok(assistant)
}
