//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Select, Text};

use crate::config::{ConfigFile, ConfigManager, GenslangConfig};
use crate::credential::DEFAULT_API_KEY_ENV;
use crate::style::{DEFAULT_STYLE, PROFILES};
use crate::translation::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings; otherwise edits them interactively.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current_defaults(&config, &manager);
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner).map(|_| ())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config, &manager);

    let current = config.genslang.clone();

    let style = select_style(current.style.as_deref())?;
    let model = prompt_text("Default model:", current.model.as_deref(), DEFAULT_MODEL)?;
    let endpoint = prompt_text(
        "API endpoint:",
        current.endpoint.as_deref(),
        DEFAULT_ENDPOINT,
    )?;
    let temperature = CustomType::<f32>::new("Temperature:")
        .with_default(current.temperature.unwrap_or(DEFAULT_TEMPERATURE))
        .with_help_message("Sampling temperature between 0.0 and 2.0")
        .prompt()?;
    if !(0.0..=2.0).contains(&temperature) {
        bail!("Temperature must be between 0.0 and 2.0");
    }
    let max_tokens = CustomType::<u32>::new("Max tokens:")
        .with_default(current.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
        .prompt()?;
    if max_tokens == 0 {
        bail!("Max tokens must be greater than 0");
    }
    let api_key_env = prompt_text(
        "API key environment variable:",
        current.api_key_env.as_deref(),
        DEFAULT_API_KEY_ENV,
    )?;

    config.genslang = GenslangConfig {
        style: Some(style),
        model: Some(model),
        endpoint: Some(endpoint),
        temperature: Some(temperature),
        max_tokens: Some(max_tokens),
        api_key_env: Some(api_key_env),
        api_key: current.api_key,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile, manager: &ConfigManager) {
    let c = &config.genslang;
    let show = |value: Option<String>| value.map_or_else(|| Style::secondary("(not set)"), Style::value);

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!("  {}        {}", Style::label("style"), show(c.style.clone()));
    println!("  {}        {}", Style::label("model"), show(c.model.clone()));
    println!("  {}     {}", Style::label("endpoint"), show(c.endpoint.clone()));
    println!(
        "  {}  {}",
        Style::label("temperature"),
        show(c.temperature.map(|t| t.to_string()))
    );
    println!(
        "  {}   {}",
        Style::label("max_tokens"),
        show(c.max_tokens.map(|t| t.to_string()))
    );
    println!(
        "  {}  {}",
        Style::label("api_key_env"),
        show(c.api_key_env.clone())
    );
    if c.api_key.is_some() {
        println!(
            "  {}      {}",
            Style::label("api_key"),
            Style::warning("stored in config file (not recommended)")
        );
    }
    println!();
}

fn select_style(default: Option<&str>) -> Result<String> {
    let options: Vec<String> = PROFILES
        .iter()
        .map(|p| format!("{} - {}", p.id.as_str(), p.display_name))
        .collect();

    let default_id = default.unwrap_or(DEFAULT_STYLE.as_str());
    let default_index = PROFILES
        .iter()
        .position(|p| p.id.as_str() == default_id)
        .unwrap_or(0);

    let selection = Select::new("Default style:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(option_key(&selection).to_string())
}

fn prompt_text(message: &str, current: Option<&str>, fallback: &str) -> Result<String> {
    let value = Text::new(message)
        .with_default(current.unwrap_or(fallback))
        .prompt()?;

    let value = value.trim();
    if value.is_empty() {
        bail!("{} cannot be empty", message.trim_end_matches(':'));
    }
    Ok(value.to_string())
}

/// Extracts the key from a "key - Label" option.
fn option_key(selection: &str) -> &str {
    selection.split(" - ").next().unwrap_or(selection)
}
