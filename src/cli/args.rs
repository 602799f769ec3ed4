use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "genslang")]
#[command(about = "Rewrite text in generational slang with an AI model")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Target style (boomer, millennial, genz, genalpha)
    #[arg(short = 's', long)]
    pub style: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// OpenAI-compatible API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum completion length in tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Write the rendered translation to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase diagnostic logging (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List or inspect slang styles
    Styles {
        #[command(subcommand)]
        command: Option<StylesCommand>,
    },
    /// Interactive translation mode
    Chat {
        /// Starting style (boomer, millennial, genz, genalpha)
        #[arg(short = 's', long)]
        style: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// OpenAI-compatible API endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
    },
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum StylesCommand {
    /// Show a style's tone, examples, and instructions
    Show {
        /// Style id
        id: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_translate_flags() {
        let args = Args::try_parse_from([
            "genslang", "notes.txt", "-s", "genz", "-f", "html", "-o", "out.html", "-vv",
        ])
        .unwrap();

        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.style.as_deref(), Some("genz"));
        assert_eq!(args.format, OutputFormat::Html);
        assert_eq!(args.output, Some(PathBuf::from("out.html")));
        assert_eq!(args.verbose, 2);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_styles_show() {
        let args = Args::try_parse_from(["genslang", "styles", "show", "boomer"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Styles {
                command: Some(StylesCommand::Show { ref id })
            }) if id == "boomer"
        ));
    }

    #[test]
    fn test_global_quiet_after_subcommand() {
        let args = Args::try_parse_from(["genslang", "chat", "-q", "-s", "genalpha"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_invalid_format_rejected() {
        assert!(Args::try_parse_from(["genslang", "-f", "pdf"]).is_err());
    }
}
