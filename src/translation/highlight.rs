//! Conversion of `[[marked]]` completions into display-ready text.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches one `[[...]]` span. Lazy, so the first `]]` closes the span.
#[allow(clippy::unwrap_used)]
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    // unwrap is safe: pattern is a compile-time constant
    Regex::new(r"\[\[(.*?)\]\]").unwrap()
});

/// Markup-safe text with slang spans wrapped in `<mark>` elements.
///
/// Safe to insert into an HTML document as-is; apply no further escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedText(String);

impl HighlightedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HighlightedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes the five markup-significant characters. `&` goes first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escapes `raw` and wraps each `[[...]]` span in a highlight element.
///
/// Unterminated markers are left as literal text.
pub fn highlight(raw: &str) -> HighlightedText {
    let escaped = escape_html(raw);
    HighlightedText(replace_spans(&escaped, |inner| {
        format!("<mark class=\"slang-highlight\">{inner}</mark>")
    }))
}

/// Removes the markers, keeping the text inside each span.
pub fn strip_markers(raw: &str) -> String {
    replace_spans(raw, str::to_string)
}

/// Replaces every `[[...]]` span, left to right, with `f(inner)`.
pub fn replace_spans<F>(text: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    MARKER
        .replace_all(text, |caps: &Captures<'_>| f(&caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARK_OPEN: &str = "<mark class=\"slang-highlight\">";

    #[test]
    fn test_escape_only() {
        assert_eq!(highlight("5 > 3 & ok").as_str(), "5 &gt; 3 &amp; ok");
    }

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">it's & </a>"#),
            "&lt;a href=&quot;x&quot;&gt;it&#039;s &amp; &lt;/a&gt;"
        );
    }

    #[test]
    fn test_existing_entities_are_escaped_once() {
        assert_eq!(highlight("&amp;").as_str(), "&amp;amp;");
    }

    #[test]
    fn test_single_span() {
        let out = highlight("This is [[lit]] great");
        assert_eq!(
            out.as_str(),
            "This is <mark class=\"slang-highlight\">lit</mark> great"
        );
        assert_eq!(out.as_str().matches(MARK_OPEN).count(), 1);
    }

    #[test]
    fn test_unterminated_marker() {
        let out = highlight("a [[b");
        assert_eq!(out.as_str(), "a [[b");
        assert!(!out.as_str().contains("<mark"));
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(
            highlight("[[]]").as_str(),
            "<mark class=\"slang-highlight\"></mark>"
        );
    }

    #[test]
    fn test_multiple_spans() {
        let out = highlight("[[No cap]], this is [[bussin]] [[fr fr]]!");
        assert_eq!(out.as_str().matches(MARK_OPEN).count(), 3);
        assert!(out.as_str().starts_with("<mark class=\"slang-highlight\">No cap</mark>,"));
        assert!(out.as_str().ends_with("<mark class=\"slang-highlight\">fr fr</mark>!"));
    }

    #[test]
    fn test_spans_do_not_nest() {
        let out = highlight("[[a [[b]] c]]");
        assert_eq!(
            out.as_str(),
            "<mark class=\"slang-highlight\">a [[b</mark> c]]"
        );
    }

    #[test]
    fn test_span_content_is_escaped() {
        let out = highlight("[[<script>]]");
        assert_eq!(
            out.as_str(),
            "<mark class=\"slang-highlight\">&lt;script&gt;</mark>"
        );
    }

    #[test]
    fn test_hostile_input_never_reaches_output_unescaped() {
        let out = highlight("<img src=x onerror='alert(1)'>[[\"yo\"]]");
        assert!(!out.as_str().contains("<img"));
        assert!(!out.as_str().contains('\''));
        assert!(out.as_str().contains("&quot;yo&quot;"));
    }

    #[test]
    fn test_no_markers_is_stable() {
        let text = "Well, that is plain text.";
        assert_eq!(highlight(text).as_str(), text);
        assert_eq!(highlight(highlight(text).as_str()).as_str(), text);
    }

    #[test]
    fn test_strip_markers() {
        assert_eq!(
            strip_markers("Give me a [[ring]] when you're [[all set]]"),
            "Give me a ring when you're all set"
        );
        assert_eq!(strip_markers("a [[b"), "a [[b");
    }

    #[test]
    fn test_replace_spans_order() {
        let mut seen = Vec::new();
        let out = replace_spans("[[one]] and [[two]]", |inner| {
            seen.push(inner.to_string());
            inner.to_uppercase()
        });
        assert_eq!(out, "ONE and TWO");
        assert_eq!(seen, vec!["one", "two"]);
    }

    #[test]
    fn test_display_matches_as_str() {
        let out = highlight("[[x]]");
        assert_eq!(out.to_string(), out.as_str());
        assert_eq!(out.clone().into_string(), out.as_str());
    }
}
