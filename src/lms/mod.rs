//! Eduplus LMS integration: the HTTP client, its normalized record shapes,
//! and the tool contracts exposed to the agent.

pub mod client;
pub mod records;
pub mod tools;

pub use client::EduplusClient;
pub use tools::eduplus_tools;
