//! # Catalog Assistant
//!
//! A question-answering assistant for a university course catalog.
//!
//! The retrieval and answering logic lives in [`catalog_core`], which has
//! no I/O and also runs inside a browser chat window. This crate adds what
//! a native host needs: TOML configuration, corpus loaders, and the
//! `catalog` CLI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │   Loader    │──▶│ Corpus+Chunk │──▶│ Similarity index │
//! │ builtin/file│   │              │   │  (term vectors)  │
//! └─────────────┘   └──────────────┘   └────────┬─────────┘
//!                                               │
//!        query ──▶ classify ──▶ respond ◀───────┘
//!                                  │
//!                                  ▼
//!                        render (text/html/json)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! catalog ask "Tell me about ACFI 801"
//! catalog list --category finance
//! catalog search "derivatives risk" --limit 3
//! catalog chat
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`loader`] | Built-in and JSON-file corpus sources |
//! | [`assistant`] | Assistant construction and timed initialization |
//! | [`ask`] | One-shot and interactive question answering |
//! | [`search`] | Raw ranked search and intent inspection |
//! | [`courses`] | Direct list and detail lookups |
//! | [`status`] | Corpus and session summary |

pub mod ask;
pub mod assistant;
pub mod config;
pub mod courses;
pub mod loader;
pub mod search;
pub mod status;
