//! Global output configuration and rendering.
//!
//! - Translation output goes to stdout (for piping)
//! - Status messages, diagnostics and errors go to stderr
//! - Quiet mode suppresses non-essential output
//! - Colors can be disabled via flag or the `NO_COLOR` environment variable

use std::io;
use std::sync::OnceLock;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::translation::{highlight, replace_spans, strip_markers};
use crate::ui::Style;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Initialize the global output configuration.
///
/// Call once at startup; later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Installs the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise verbosity 0/1/2+ maps to warn/info/debug.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("genslang={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(!is_no_color())
        .without_time()
        .try_init();
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// How a translation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Slang highlighted with terminal colors
    #[default]
    Terminal,
    /// HTML-escaped text with <mark> elements around slang
    Html,
    /// Markers removed
    Plain,
    /// Completion exactly as returned, markers included
    Raw,
}

impl OutputFormat {
    /// The format to use for a destination. Files and pipes never get
    /// terminal escape codes.
    pub const fn for_destination(self, to_terminal: bool) -> Self {
        match self {
            Self::Terminal if !to_terminal => Self::Plain,
            other => other,
        }
    }
}

/// Renders a raw completion in the requested format.
///
/// `Terminal` degrades to `Plain` when colors are disabled, and drops control
/// characters other than newline and tab from the completion.
pub fn render(raw: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Terminal if is_no_color() => strip_markers(&strip_control(raw)),
        OutputFormat::Terminal => replace_spans(&strip_control(raw), |inner| Style::slang(inner)),
        OutputFormat::Html => highlight(raw).into_string(),
        OutputFormat::Plain => strip_markers(raw),
        OutputFormat::Raw => raw.to_string(),
    }
}

fn strip_control(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default_not_quiet() {
        let config = OutputConfig::default();
        assert!(!config.quiet);
    }

    #[test]
    fn test_render_html() {
        assert_eq!(
            render("5 > 3 [[fr]]", OutputFormat::Html),
            "5 &gt; 3 <mark class=\"slang-highlight\">fr</mark>"
        );
    }

    #[test]
    fn test_render_plain_and_raw() {
        let raw = "Give me a [[ring]] <soon>";
        assert_eq!(render(raw, OutputFormat::Plain), "Give me a ring <soon>");
        assert_eq!(render(raw, OutputFormat::Raw), raw);
    }

    #[test]
    fn test_terminal_degrades_to_plain_off_terminal() {
        assert_eq!(
            OutputFormat::Terminal.for_destination(false),
            OutputFormat::Plain
        );
        assert_eq!(
            OutputFormat::Terminal.for_destination(true),
            OutputFormat::Terminal
        );
        assert_eq!(OutputFormat::Html.for_destination(false), OutputFormat::Html);
        assert_eq!(OutputFormat::Raw.for_destination(false), OutputFormat::Raw);
    }

    #[test]
    fn test_strip_control_keeps_newline_and_tab() {
        assert_eq!(
            strip_control("a\x1b[2Jb\u{7}\nc\td\r"),
            "a[2Jb\nc\td"
        );
    }

    #[test]
    fn test_render_terminal_removes_escape_sequences() {
        let out = render("[[rizz]]\x1b]0;owned\x07 ok", OutputFormat::Terminal);
        assert!(out.contains("rizz"));
        assert!(!out.contains('\x07'));
        assert!(!out.contains("\x1b]0;"));
    }

    #[test]
    fn test_render_terminal_drops_markers() {
        let out = render("You [[ate]]", OutputFormat::Terminal);
        assert!(out.starts_with("You "));
        assert!(out.contains("ate"));
        assert!(!out.contains("[["));
    }
}
