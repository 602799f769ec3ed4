//! Styles command handler for browsing the slang style catalog.

use anyhow::Result;

use crate::output::{self, OutputFormat};
use crate::style::{self, DEFAULT_STYLE, PROFILES, StyleProfile};
use crate::ui::Style;

/// Lists all available styles.
pub fn list_styles() {
    println!("{}", Style::header("Styles"));
    for profile in &PROFILES {
        let marker = if profile.id == DEFAULT_STYLE {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!(
            "  {}  {:12} {}{marker}",
            Style::value(format!("{:10}", profile.id.as_str())),
            profile.display_name,
            Style::secondary(first_sentence(profile.tone))
        );
    }
}

/// Shows the details of one style.
pub fn show_style(id: &str) -> Result<()> {
    let profile = style::resolve(id)?;
    print_profile(profile);
    Ok(())
}

fn print_profile(profile: &StyleProfile) {
    println!("{}", Style::header(profile.display_name));
    println!();
    println!("  {}  {}", Style::label("Id:  "), Style::value(profile.id));
    println!("  {}  {}", Style::label("Tone:"), Style::secondary(profile.tone));
    println!();
    println!("{}", Style::label("Examples:"));
    for example in profile.examples {
        println!("  {}", example.input);
        println!("  → {}", output::render(example.output, OutputFormat::Terminal));
    }
    println!();
    println!("{}", Style::label("Instructions:"));
    println!("{}", profile.instruction);
}

fn first_sentence(text: &str) -> &str {
    text.find(". ").map_or(text, |end| &text[..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence() {
        assert_eq!(
            first_sentence("Meme-heavy, very online. Chaotic energy."),
            "Meme-heavy, very online."
        );
        assert_eq!(first_sentence("No period here"), "No period here");
    }

    #[test]
    fn test_show_unknown_style_fails() {
        assert!(show_style("genx").is_err());
    }
}
