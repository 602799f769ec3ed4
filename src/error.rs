//! Error types for the translation core.

use thiserror::Error;

use crate::style;

/// Errors produced while resolving a style, building a request, or talking to
/// the completion service.
///
/// Every variant is terminal for the operation that produced it.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The requested style id is not part of the catalog.
    #[error(
        "Unknown style '{id}'\n\nAvailable styles: {}",
        style::available_ids().join(", ")
    )]
    UnknownStyle { id: String },

    /// The input text is empty after trimming.
    #[error("Please enter some text to translate")]
    EmptyInput,

    /// No API key could be found in the session, environment, or config file.
    #[error(
        "No API key available\n\n\
         Set the {env_var} environment variable:\n  \
         export {env_var}=\"your-api-key\"\n\n\
         Or run 'genslang configure' / use /key in chat mode"
    )]
    MissingCredential { env_var: String },

    /// The completion call failed or returned a non-success status.
    ///
    /// `message` is the service's own message when it supplied one.
    #[error("{message}")]
    RemoteService { status: Option<u16>, message: String },

    /// The service answered successfully but without the expected content.
    #[error("Malformed response from completion service: {0}")]
    MalformedResponse(String),
}

impl TranslateError {
    /// Maps the error to a sysexits-style process exit code.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::UnknownStyle { .. } => exitcode::USAGE,
            Self::EmptyInput => exitcode::DATAERR,
            Self::MissingCredential { .. } => exitcode::CONFIG,
            Self::RemoteService { .. } => exitcode::UNAVAILABLE,
            Self::MalformedResponse(_) => exitcode::PROTOCOL,
        }
    }
}

/// Returns the exit code for an application error.
///
/// Errors that do not originate from the translation core exit with `1`.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    err.downcast_ref::<TranslateError>()
        .map_or(1, TranslateError::exit_code)
}
