use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::error::TranslateError;
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::output::{self, OutputFormat};
use crate::status;
use crate::translation::Translator;
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub style: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let resolve_options = ResolveOptions {
        style: options.style,
        model: options.model,
        endpoint: options.endpoint,
        temperature: options.temperature,
        max_tokens: options.max_tokens,
    };
    let config = resolve_config(&resolve_options, &config_file)?;

    let source_text = InputReader::read(options.file.as_deref())?;
    if source_text.trim().is_empty() {
        return Err(TranslateError::EmptyInput.into());
    }

    let credentials = config.credentials();
    let translator = Translator::new(config.endpoint.clone(), config.params.clone());

    let spinner = Spinner::new(&format!(
        "Translating to {}...",
        config.style.display_name
    ));
    let result = translator
        .translate(config.style, &source_text, &credentials)
        .await;
    spinner.stop();

    let translation = result.map_err(|e| match e {
        TranslateError::RemoteService { .. } | TranslateError::MalformedResponse(_) => {
            anyhow::Error::new(e).context("Translation failed")
        }
        other => other.into(),
    })?;

    let to_terminal = options.output.is_none() && io::stdout().is_terminal();
    let format = options.format.for_destination(to_terminal);
    let rendered = output::render(&translation.raw, format);

    match options.output {
        Some(path) => {
            let mut contents = rendered;
            contents.push('\n');
            atomic_write(&path, &contents)?;
            status!(
                "{} Wrote {} translation to {}",
                Style::success("✓"),
                Style::value(config.style.display_name),
                Style::secondary(path.display())
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
