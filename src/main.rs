//! # Catalog Assistant CLI (`catalog`)
//!
//! The `catalog` binary answers questions about the course catalog from the
//! terminal, either one query at a time or as an interactive chat.
//!
//! ## Usage
//!
//! ```bash
//! catalog --config ./config/catalog.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `catalog ask "<query>"` | Answer one question |
//! | `catalog chat` | Interactive session on stdin |
//! | `catalog search "<query>"` | Ranked raw hits with scores |
//! | `catalog list` | List courses, optionally by category |
//! | `catalog show <code>` | Full detail for one course |
//! | `catalog intent "<query>"` | Show how a query is classified |
//! | `catalog status` | Corpus and session summary |
//!
//! ## Examples
//!
//! ```bash
//! # Ask about one course
//! catalog ask "Tell me about ACFI 804"
//!
//! # Compare two courses, as HTML course cards
//! catalog ask "compare ACFI 801 and ACFI 802" --format html
//!
//! # Finance courses only
//! catalog list --category finance
//!
//! # Load a catalog file instead of the built-in one
//! catalog status --config ./config/catalog.toml
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `catalog=warn`).

use std::path::{Path, PathBuf};

use catalog_assistant::{ask, config, courses, search, status};
use catalog_core::corpus::Category;
use catalog_core::render::OutputFormat;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG: &str = "./config/catalog.toml";

/// Catalog Assistant CLI: ask questions about ACFI graduate courses.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/catalog.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "catalog",
    about = "Course catalog assistant: ask questions about ACFI graduate courses",
    version,
    long_about = "Answers free-text questions about a course catalog. Queries are classified \
    by intent (specific course, list, comparison, prerequisites, topic, general info) and \
    answered from course records retrieved by bag-of-words cosine similarity."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/catalog.toml`; when that file does not exist
    /// the built-in catalog and default settings are used.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Answer a single question.
    Ask {
        /// The question, e.g. "What are the prerequisites for ACFI 804?".
        query: String,

        /// Output format: `text`, `html`, or `json`. Overrides `output.format`.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Start an interactive chat session on stdin.
    ///
    /// Lines beginning with `/` are session commands: `/history`, `/reset`,
    /// `/status`, and `/quit`.
    Chat {
        /// Output format: `text`, `html`, or `json`. Overrides `output.format`.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show raw ranked search hits for a query.
    ///
    /// Runs a top-K cosine search over the indexed course documents and
    /// prints each hit with its score, without building an answer.
    Search {
        /// The search query string.
        query: String,

        /// Maximum number of hits. Defaults to `retrieval.default_top_k`.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List courses.
    List {
        /// Only courses matching `finance` or `accounting` keywords.
        #[arg(long)]
        category: Option<Category>,

        /// Output format: `text`, `html`, or `json`. Overrides `output.format`.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show full detail for one course.
    Show {
        /// Course code, e.g. `ACFI 801` or `acfi801`.
        code: String,

        /// Output format: `text`, `html`, or `json`. Overrides `output.format`.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Show how a query is classified.
    Intent {
        /// The query to classify.
        query: String,

        /// Print the intent as `json` instead of a one-line summary.
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Summarize the loaded corpus and session.
    Status {
        /// Output format: `text` or `json`.
        #[arg(long)]
        format: Option<OutputFormat>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalog=warn,catalog_core=warn,catalog_assistant=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Classification needs no corpus or config
    if let Commands::Intent { query, format } = &cli.command {
        return search::run_intent(query, *format);
    }

    let cfg = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_minimal(Path::new(DEFAULT_CONFIG))?,
    };

    match cli.command {
        Commands::Ask { query, format } => {
            ask::run_ask(&cfg, &query, format).await?;
        }
        Commands::Chat { format } => {
            ask::run_chat(&cfg, format).await?;
        }
        Commands::Search { query, limit } => {
            search::run_search(&cfg, &query, limit).await?;
        }
        Commands::List { category, format } => {
            courses::run_list(&cfg, category, format).await?;
        }
        Commands::Show { code, format } => {
            courses::run_show(&cfg, &code, format).await?;
        }
        Commands::Status { format } => {
            status::run_status(&cfg, format).await?;
        }
        Commands::Intent { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
