//! # genslang - Generational Slang Translator
//!
//! `genslang` rewrites text in the voice of a generation (Baby Boomer,
//! Millennial, Gen Z, Gen Alpha) using an OpenAI-compatible chat completion
//! endpoint. The model marks generation-specific slang with `[[...]]`, which
//! genslang renders as highlighted terminal text, HTML `<mark>` elements,
//! or plain text.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//!
//! # Translate from stdin
//! echo "That's really good!" | genslang --style genz
//!
//! # Translate a file into HTML
//! genslang --style genalpha --format html -o out.html ./notes.txt
//!
//! # Interactive mode
//! genslang chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/genslang/config.toml`:
//!
//! ```toml
//! [genslang]
//! style = "genz"
//! model = "gpt-4.1"
//! endpoint = "https://api.openai.com"
//! temperature = 0.8
//! max_tokens = 500
//! api_key_env = "OPENAI_API_KEY"
//! ```

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Session-lifetime API key storage.
pub mod credential;

/// Error types and exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration, rendering and logging setup.
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The slang style catalog.
pub mod style;

/// Prompt construction, highlighting, and the completion client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
