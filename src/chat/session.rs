use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Password, PasswordDisplayMode, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::config::ResolvedConfig;
use crate::credential::CredentialStore;
use crate::error::TranslateError;
use crate::output::{self, OutputFormat};
use crate::style::{self, StyleProfile};
use crate::translation::{GenerationParams, Translator};
use crate::ui::{Spinner, Style, handle_prompt_cancellation};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub style: &'static StyleProfile,
    pub endpoint: String,
    pub params: GenerationParams,
    pub credentials: CredentialStore,
}

impl SessionConfig {
    pub fn from_resolved(resolved: &ResolvedConfig) -> Self {
        Self {
            style: resolved.style,
            endpoint: resolved.endpoint.clone(),
            params: resolved.params.clone(),
            credentials: resolved.credentials(),
        }
    }
}

/// An interactive translation session.
///
/// Every line is translated on its own; no conversation history is kept.
pub struct ChatSession {
    style: &'static StyleProfile,
    credentials: CredentialStore,
    translator: Translator,
}

impl ChatSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            style: config.style,
            credentials: config.credentials,
            translator: Translator::new(config.endpoint, config.params),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(self.style);

        if self.credentials.get().is_none() {
            ui::print_warning("No API key found. Use /key to enter one for this session.");
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let render_config = if output::is_no_color() {
            RenderConfig::empty()
        } else {
            let mut config = RenderConfig::default()
                .with_prompt_prefix(prompt_style)
                .with_answered_prompt_prefix(prompt_style);
            config.option = StyleSheet::new().with_fg(Color::Grey);
            config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));
            config
        };

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd)? {
                            break;
                        }
                    }
                    Input::Text(text) => self.translate_and_print(&text).await,
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `Ok(false)` when the session should end.
    fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(self.style, &self.translator, &self.credentials);
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Key => self.prompt_key()?,
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Style(None) => ui::print_styles(self.style),
            SlashCommand::Style(Some(id)) => self.set_style(&id),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    fn set_style(&mut self, id: &str) {
        match style::resolve(id) {
            Ok(profile) => {
                self.style = profile;
                println!(
                    "{} Style set to {}\n",
                    Style::success("✓"),
                    Style::value(profile.display_name)
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    fn prompt_key(&mut self) -> Result<()> {
        let key = handle_prompt_cancellation(|| {
            Ok(Password::new("API key:")
                .with_display_mode(PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?)
        })?;

        let Some(key) = key else {
            return Ok(());
        };

        if self.credentials.save(&key) {
            println!("{} API key saved for this session\n", Style::success("✓"));
        } else {
            ui::print_error("Please enter a valid API key");
        }
        Ok(())
    }

    /// Translates one line. Failures are reported and the session continues.
    async fn translate_and_print(&self, text: &str) {
        let spinner = Spinner::new(&format!("Translating to {}...", self.style.display_name));
        let result = self
            .translator
            .translate(self.style, text, &self.credentials)
            .await;
        spinner.stop();

        match result {
            Ok(translation) => {
                println!("{}", output::render(&translation.raw, OutputFormat::Terminal));
                println!();
            }
            Err(e @ (TranslateError::RemoteService { .. } | TranslateError::MalformedResponse(_))) => {
                ui::print_error(&format!("Translation failed: {e}"));
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, ResolveOptions, resolve_config};
    use crate::style::StyleId;

    fn test_session() -> ChatSession {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default())
            .unwrap_or_else(|e| panic!("default config must resolve: {e}"));
        ChatSession::new(SessionConfig::from_resolved(&resolved))
    }

    #[test]
    fn test_session_starts_with_resolved_style() {
        let session = test_session();
        assert_eq!(session.style.id, StyleId::Boomer);
    }

    #[test]
    fn test_set_style_switches_profile() {
        let mut session = test_session();
        session.set_style("genalpha");
        assert_eq!(session.style.id, StyleId::GenAlpha);
    }

    #[test]
    fn test_set_unknown_style_keeps_current() {
        let mut session = test_session();
        session.set_style("genz");
        session.set_style("genx");
        assert_eq!(session.style.id, StyleId::GenZ);
    }

    #[test]
    fn test_commands_keep_session_running_until_quit() {
        let mut session = test_session();
        assert!(matches!(session.handle_command(SlashCommand::Help), Ok(true)));
        assert!(matches!(
            session.handle_command(SlashCommand::Style(Some("millennial".to_string()))),
            Ok(true)
        ));
        assert_eq!(session.style.id, StyleId::Millennial);
        assert!(matches!(session.handle_command(SlashCommand::Quit), Ok(false)));
    }
}
