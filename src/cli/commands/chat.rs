use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub style: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

fn load_session_config(options: ChatOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let resolve_options = ResolveOptions {
        style: options.style,
        model: options.model,
        endpoint: options.endpoint,
        ..ResolveOptions::default()
    };
    let resolved = resolve_config(&resolve_options, &config_file)?;

    Ok(SessionConfig::from_resolved(&resolved))
}
