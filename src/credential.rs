//! Session-lifetime API key storage.
//!
//! A key saved during a session lives only in memory. When none has been
//! saved, the store falls back to the configured environment variable and
//! then to the `api_key` entry of the config file.

use std::fmt;

use crate::error::TranslateError;

/// Environment variable consulted when the config file does not name one.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Where the currently effective key comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Session,
    Environment,
    ConfigFile,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session => f.write_str("session"),
            Self::Environment => f.write_str("environment"),
            Self::ConfigFile => f.write_str("config file"),
        }
    }
}

#[derive(Clone)]
pub struct CredentialStore {
    session_key: Option<String>,
    env_var: String,
    config_key: Option<String>,
}

impl CredentialStore {
    pub fn new(env_var: impl Into<String>, config_key: Option<String>) -> Self {
        Self {
            session_key: None,
            env_var: env_var.into(),
            config_key: config_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// Saves a key for the rest of the session.
    ///
    /// Returns `false` and leaves the store untouched if `key` is blank.
    pub fn save(&mut self, key: &str) -> bool {
        let key = key.trim();
        if key.is_empty() {
            return false;
        }
        self.session_key = Some(key.to_string());
        true
    }

    /// Returns the effective key and its source.
    pub fn lookup(&self) -> Option<(String, CredentialSource)> {
        if let Some(key) = &self.session_key {
            return Some((key.clone(), CredentialSource::Session));
        }
        if let Ok(key) = std::env::var(&self.env_var)
            && !key.trim().is_empty()
        {
            return Some((key.trim().to_string(), CredentialSource::Environment));
        }
        self.config_key
            .as_ref()
            .map(|key| (key.trim().to_string(), CredentialSource::ConfigFile))
    }

    pub fn get(&self) -> Option<String> {
        self.lookup().map(|(key, _)| key)
    }

    pub fn source(&self) -> Option<CredentialSource> {
        self.lookup().map(|(_, source)| source)
    }

    /// Returns the effective key or [`TranslateError::MissingCredential`].
    pub fn require(&self) -> Result<String, TranslateError> {
        self.get().ok_or_else(|| TranslateError::MissingCredential {
            env_var: self.env_var.clone(),
        })
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV, None)
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |k: &Option<String>| k.as_ref().map(|_| "<redacted>");
        f.debug_struct("CredentialStore")
            .field("session_key", &redact(&self.session_key))
            .field("env_var", &self.env_var)
            .field("config_key", &redact(&self.config_key))
            .finish()
    }
}
