//! Conversational commands: `catalog ask` and `catalog chat`.
//!
//! `ask` answers a single query. `chat` runs a line-oriented session on
//! stdin, keeping one transcript for the whole session. Lines starting
//! with `/` are session commands:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `/history` | Print the transcript |
//! | `/reset` | Clear the transcript |
//! | `/status` | Print corpus and session status |
//! | `/quit`, `/exit` | End the session |
//!
//! The `> ` prompt is only written when stdin is a terminal, so piped
//! input produces clean output.

use std::io::Write;

use anyhow::{Context, Result};
use catalog_core::render::OutputFormat;
use catalog_core::session::Role;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::assistant::{build_assistant, initialize, CatalogAssistant};
use crate::config::Config;
use crate::status::print_status;

pub async fn run_ask(config: &Config, query: &str, format: Option<OutputFormat>) -> Result<()> {
    let mut assistant = build_assistant(config, format)?;
    initialize(&mut assistant, config).await;
    let answer = assistant.process_query(query).await;
    println!("{}", answer);
    Ok(())
}

pub async fn run_chat(config: &Config, format: Option<OutputFormat>) -> Result<()> {
    let mut assistant = build_assistant(config, format)?;
    initialize(&mut assistant, config).await;

    let interactive = atty::is(atty::Stream::Stdin);
    println!("{}", assistant.greeting());
    if interactive {
        println!("Type /quit to leave, /history to review the conversation.");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush().context("Failed to flush stdout")?;
        }

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "/quit" | "/exit" => break,
            "/history" => print_history(&assistant),
            "/reset" => {
                assistant.clear_history();
                println!("Conversation history cleared.");
            }
            "/status" => print_status(&assistant.status(), assistant.corpus(), OutputFormat::Text)?,
            cmd if cmd.starts_with('/') => {
                println!(
                    "Unknown command: {}. Available: /history, /reset, /status, /quit",
                    cmd
                );
            }
            query => {
                // Retry a failed or timed-out load under the same time limit
                if !assistant.is_initialized() {
                    initialize(&mut assistant, config).await;
                }
                let answer = assistant.process_query(query).await;
                println!("{}", answer);
                println!();
            }
        }
    }

    Ok(())
}

fn print_history(assistant: &CatalogAssistant) {
    let turns = assistant.history();
    if turns.is_empty() {
        println!("No conversation yet.");
        return;
    }
    for turn in turns {
        let who = match turn.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        println!("[{}] {}:", turn.timestamp.format("%H:%M:%S"), who);
        println!("{}", turn.content);
        if !turn.sources.is_empty() {
            println!("    sources: {}", turn.sources.join(", "));
        }
        println!();
    }
}
