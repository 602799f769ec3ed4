use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::credential::{CredentialStore, DEFAULT_API_KEY_ENV};
use crate::paths;
use crate::style::{self, DEFAULT_STYLE, StyleProfile};
use crate::translation::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, GenerationParams,
};

/// Settings in the `[genslang]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenslangConfig {
    /// Default style id.
    pub style: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Maximum completion length in tokens.
    pub max_tokens: Option<u32>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/genslang/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub genslang: GenslangConfig,
}

/// Configuration after merging CLI arguments, config file, and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub style: &'static StyleProfile,
    pub endpoint: String,
    pub params: GenerationParams,
    /// Environment variable consulted for the API key.
    pub api_key_env: String,
    /// API key from the config file, if any.
    pub config_api_key: Option<String>,
}

impl ResolvedConfig {
    /// Builds the credential store for this configuration.
    pub fn credentials(&self) -> CredentialStore {
        CredentialStore::new(self.api_key_env.clone(), self.config_api_key.clone())
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub style: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then config file, then built-in defaults.
///
/// # Errors
///
/// Returns [`crate::error::TranslateError::UnknownStyle`] for an unknown style
/// id, or an error for out-of-range generation parameters.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.genslang;

    let style = match options.style.as_ref().or(file.style.as_ref()) {
        Some(id) => style::resolve(id)?,
        None => DEFAULT_STYLE.profile(),
    };

    let model = options
        .model
        .as_ref()
        .or(file.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let temperature = options
        .temperature
        .or(file.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);

    if !(0.0..=2.0).contains(&temperature) {
        bail!("Invalid temperature {temperature}: must be between 0.0 and 2.0");
    }

    let max_tokens = options
        .max_tokens
        .or(file.max_tokens)
        .unwrap_or(DEFAULT_MAX_TOKENS);

    if max_tokens == 0 {
        bail!("Invalid max_tokens: must be greater than 0");
    }

    let api_key_env = file
        .api_key_env
        .clone()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());

    Ok(ResolvedConfig {
        style,
        endpoint,
        params: GenerationParams {
            model,
            temperature,
            max_tokens,
        },
        api_key_env,
        config_api_key: file.api_key.clone(),
    })
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/genslang/config.toml`
    /// or `~/.config/genslang/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, or defaults if it does not exist.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        crate::fs::atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
