use anyhow::{Context, Result};
use catalog_core::index::DEFAULT_TOP_K;
use catalog_core::render::OutputFormat;
use catalog_core::search::SearchParams;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorpusConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_init_timeout_secs")]
    pub init_timeout_secs: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            path: None,
            init_timeout_secs: default_init_timeout_secs(),
        }
    }
}

fn default_source() -> String {
    "builtin".to_string()
}
fn default_init_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
    #[serde(default = "default_pipeline_top_k")]
    pub pipeline_top_k: usize,
    #[serde(default = "default_min_similarity")]
    pub min_similarity: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            pipeline_top_k: default_pipeline_top_k(),
            min_similarity: default_min_similarity(),
        }
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}
fn default_pipeline_top_k() -> usize {
    SearchParams::default().top_k
}
fn default_min_similarity() -> f64 {
    SearchParams::default().min_similarity
}

impl RetrievalConfig {
    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            top_k: self.pipeline_top_k,
            min_similarity: self.min_similarity,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

impl OutputConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("output.format: {}", e))
    }
}

impl Config {
    /// Built-in catalog, default retrieval tuning, text output.
    pub fn minimal() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            retrieval: RetrievalConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Resolve a relative corpus path against the config file's directory
    if let Some(corpus_path) = &config.corpus.path {
        if corpus_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.corpus.path = Some(dir.join(corpus_path));
            }
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Load `path`, falling back to [`Config::minimal`] when the file is absent.
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::minimal())
    }
}

fn validate(config: &Config) -> Result<()> {
    // Validate retrieval
    if config.retrieval.default_top_k == 0 {
        anyhow::bail!("retrieval.default_top_k must be >= 1");
    }
    if config.retrieval.pipeline_top_k == 0 {
        anyhow::bail!("retrieval.pipeline_top_k must be >= 1");
    }
    if !(0.0..1.0).contains(&config.retrieval.min_similarity) {
        anyhow::bail!("retrieval.min_similarity must be in [0.0, 1.0)");
    }

    // Validate corpus
    match config.corpus.source.as_str() {
        "builtin" => {}
        "file" => {
            if config.corpus.path.is_none() {
                anyhow::bail!("corpus.path must be specified when source is 'file'");
            }
        }
        other => anyhow::bail!(
            "Unknown corpus source: '{}'. Must be builtin or file.",
            other
        ),
    }

    // Validate output
    config.output.output_format()?;

    Ok(())
}
