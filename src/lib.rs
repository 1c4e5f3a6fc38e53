//! redraft — submit text or images to an OpenAI-compatible chat API and
//! get a transformed version back (proofread, summarized, extracted from
//! an image, …).
//!
//! All state lives in a flat settings file; all processing is delegated
//! to the remote model. Modules:
//!   - settings.rs — persisted API host / key / theme
//!   - llm/        — the chat-completions contract (task templates,
//!                   wire types, completion client)
//!   - encode.rs   — image file → data-URI payloads
//!   - commands.rs — CLI handlers over the above

pub mod commands;
pub mod encode;
pub mod llm;
pub mod settings;
