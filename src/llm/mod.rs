//! LLM domain — the chat-completions contract.
//!
//! Everything that touches the remote API lives here:
//!   - prompts.rs — task → instruction-template table, model id, path
//!   - types.rs   — request/response wire shapes
//!   - client.rs  — request construction, dispatch, response extraction

pub mod client;
pub mod prompts;
pub mod types;

pub use client::{ApiConfig, CompletionClient, CompletionError};
