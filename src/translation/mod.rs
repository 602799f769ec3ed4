mod client;
mod highlight;
mod prompt;
mod translator;

pub use client::{
    CompletionClient, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    GenerationParams,
};
pub use highlight::{HighlightedText, escape_html, highlight, replace_spans, strip_markers};
pub use prompt::{TranslationRequest, build_prompt, build_system_prompt};
pub use translator::{Translation, Translator};
