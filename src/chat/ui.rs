//! Chat mode UI components.

use crate::credential::CredentialStore;
use crate::style::{PROFILES, StyleProfile};
use crate::translation::Translator;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(style: &StyleProfile) {
    println!(
        "{} {} - Interactive Slang Mode ({})",
        Style::header("genslang"),
        Style::version(format!("v{VERSION}")),
        Style::value(style.display_name)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Later!"));
}

pub fn print_config(style: &StyleProfile, translator: &Translator, credentials: &CredentialStore) {
    let params = translator.params();
    let key_status = credentials.source().map_or_else(
        || Style::warning(format!("not set (export {})", credentials.env_var())),
        |source| Style::success(format!("set ({source})")),
    );

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}        {} ({})",
        Style::label("style"),
        Style::value(style.display_name),
        style.id
    );
    println!(
        "  {}        {}",
        Style::label("model"),
        Style::value(&params.model)
    );
    println!(
        "  {}  {}",
        Style::label("temperature"),
        Style::value(params.temperature)
    );
    println!(
        "  {}   {}",
        Style::label("max_tokens"),
        Style::value(params.max_tokens)
    );
    println!(
        "  {}     {}",
        Style::label("endpoint"),
        Style::secondary(translator.endpoint())
    );
    println!("  {}      {key_status}", Style::label("api key"));
    println!();
}

pub fn print_styles(current: &StyleProfile) {
    println!("{}", Style::header("Styles"));
    for profile in &PROFILES {
        let marker = if profile.id == current.id { "●" } else { " " };
        println!(
            "  {marker} {}  {}",
            Style::value(format!("{:10}", profile.id.as_str())),
            Style::secondary(profile.display_name)
        );
    }
    println!("{}", Style::hint("Switch with /style <id>"));
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/style [id]"),
        Style::secondary("Show or switch the target style")
    );
    println!(
        "  {}         {}",
        Style::command("/key"),
        Style::secondary("Enter an API key for this session (not saved)")
    );
    println!(
        "  {}      {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}        {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}        {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", Style::warning("Warning:"));
    eprintln!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
