//! Interactive chat mode for translation sessions.
//!
//! A REPL with slash commands for switching styles and entering a
//! session-only API key.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{ChatSession, SessionConfig};
