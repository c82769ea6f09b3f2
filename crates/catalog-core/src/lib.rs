//! # Catalog Core
//!
//! Portable retrieval and response core for the course catalog assistant:
//! data models, corpus store, chunking, term vectors, similarity index,
//! intent classification, response assembly, and rendering.
//!
//! This crate contains no tokio, filesystem, or network code. It compiles
//! to both native targets and `wasm32-unknown-unknown`, so the same core
//! serves the `catalog` CLI and a browser-hosted chat window.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Course records, documents, retrieval hits |
//! | [`corpus`] | Course store and category filters |
//! | [`chunk`] | Course record → documents |
//! | [`vector`] | Term vectors and cosine similarity |
//! | [`index`] | Similarity index trait and brute-force implementation |
//! | [`search`] | Pipeline retrieval with similarity floor |
//! | [`intent`] | Ordered-rule query classification |
//! | [`respond`] | Structured response assembly |
//! | [`render`] | HTML / text / JSON presentation |
//! | [`session`] | Conversation transcript |
//! | [`source`] | Corpus loader trait |
//! | [`assistant`] | End-to-end query service |

pub mod assistant;
pub mod chunk;
pub mod corpus;
pub mod error;
pub mod index;
pub mod intent;
pub mod models;
pub mod render;
pub mod respond;
pub mod search;
pub mod session;
pub mod source;
pub mod vector;

pub use assistant::{Assistant, AssistantStatus};
pub use error::CorpusError;
pub use render::OutputFormat;
