//! Chat backend for a university assistant.
//!
//! An LLM-driven assistant answers staff questions by calling analytics
//! endpoints of the Eduplus LMS and searching an institutional document
//! store. Conversations are persisted per session in Postgres and exposed
//! over a small HTTP API.
//!
//! Module map:
//! - [`tools`]: the tool abstraction the assistant invokes (typed
//!   parameters, argument parsing, schema validation).
//! - [`lms`]: HTTP client for the Eduplus analytics API plus the tool
//!   registry built on top of it.
//! - [`agent`]: the assistant itself, the reasoning engine that drives the
//!   tool loop, and vector-store document search.
//! - [`store`]: session and message persistence.
//! - [`chat`]: the chat turn orchestration tying store and assistant
//!   together.
//! - [`api`]: axum routes and payload types.

pub mod agent;
pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod lms;
pub mod store;
pub mod tools;

pub use error::{ChatError, Result};
