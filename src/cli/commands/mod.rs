//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Style catalog command handler.
pub mod styles;

/// Translation command handler.
pub mod translate;
