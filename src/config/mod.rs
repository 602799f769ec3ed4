mod manager;

pub use manager::{
    ConfigFile, ConfigManager, GenslangConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
