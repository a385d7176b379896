//! Markdown reduction and structure helpers.
//!
//! [`reduce`] produces the short-form preview shown on project cards: a
//! single regex pass strips heading markers, inline links, emphasis, and
//! inline code markers, then the result is truncated to a preview length.
//! It is deliberately not a markdown parser; nested or malformed syntax
//! can leave residual punctuation behind, which is accepted.
//!
//! [`first_heading`] walks the document structure with `pulldown-cmark`
//! and is used for overlay titles.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;

/// Placeholder returned for empty input.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Marker appended to truncated previews.
const ELLIPSIS: &str = "...";

/// Strip markdown syntax from `text` and truncate to `limit` characters.
///
/// Heading markers, whole inline links (text and URL), emphasis markers,
/// and inline code markers are removed. When the stripped text exceeds
/// `limit` characters it is cut to exactly `limit` characters and `...`
/// is appended, so the result never exceeds `limit + 3` characters.
///
/// Empty input yields [`NO_DESCRIPTION`] regardless of `limit`. Total
/// over all string inputs; never fails.
///
/// # Panics
///
/// Panics only if the built-in strip pattern is invalid, which would be
/// a bug in this crate.
#[must_use]
pub fn reduce(text: &str, limit: usize) -> String {
    if text.is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    let strip = Regex::new(r"#+|\[.*?\]\(.*?\)|\*+|`+").expect("invalid markdown strip pattern");
    let plain = strip.replace_all(text, "");

    if plain.chars().count() > limit {
        let cut: String = plain.chars().take(limit).collect();
        format!("{cut}{ELLIPSIS}")
    } else {
        plain.into_owned()
    }
}

/// Extract the text of the first heading in a markdown document.
///
/// Inline formatting inside the heading is flattened to plain text.
/// Returns `None` when the document has no heading.
#[must_use]
pub fn first_heading(content: &str) -> Option<String> {
    let parser = Parser::new(content);
    let mut in_heading = false;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                in_heading = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                if in_heading && !text.trim().is_empty() {
                    return Some(text.trim().to_string());
                }
                in_heading = false;
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_heading => text.push(' '),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_empty_returns_placeholder() {
        assert_eq!(reduce("", 0), NO_DESCRIPTION);
        assert_eq!(reduce("", 150), NO_DESCRIPTION);
        assert_eq!(reduce("", usize::MAX), NO_DESCRIPTION);
    }

    #[test]
    fn test_reduce_strips_markdown_tokens() {
        let input = "# Title\n**bold** [link](url)";
        let reduced = reduce(input, 150);

        assert!(!reduced.contains('#'));
        assert!(!reduced.contains('*'));
        assert!(!reduced.contains('['));
        assert!(!reduced.contains('('));
        // The whole link token is removed, text and URL alike
        assert_eq!(reduced.trim(), "Title\nbold");
    }

    #[test]
    fn test_reduce_strips_inline_code() {
        assert_eq!(reduce("run `cargo build` now", 150), "run cargo build now");
    }

    #[test]
    fn test_reduce_short_text_unchanged() {
        assert_eq!(reduce("Hello world", 150), "Hello world");
    }

    #[test]
    fn test_reduce_truncates_with_ellipsis() {
        let reduced = reduce("abcdefghij", 4);
        assert_eq!(reduced, "abcd...");
    }

    #[test]
    fn test_reduce_length_bound() {
        let inputs = [
            "plain text that goes on for a while without any markup at all",
            "# A\n## B\nsome **bold** and *italic* and `code` and [l](u)",
            "xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
        ];
        for input in inputs {
            for limit in [0, 1, 5, 20, 150] {
                let reduced = reduce(input, limit);
                assert!(
                    reduced.chars().count() <= limit + 3,
                    "reduce({input:?}, {limit}) = {reduced:?} exceeds bound"
                );
            }
        }
    }

    #[test]
    fn test_reduce_idempotent_on_plain_output() {
        let once = reduce("# Heading\nplain tail", 150);
        let twice = reduce(&once, 150);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reduce_zero_limit() {
        // Non-empty input with limit 0 is all ellipsis
        assert_eq!(reduce("anything", 0), "...");
    }

    #[test]
    fn test_reduce_multibyte_truncation() {
        // Truncation counts characters, not bytes, and never splits one
        let reduced = reduce("héllo wörld", 5);
        assert_eq!(reduced, "héllo...");
    }

    #[test]
    fn test_reduce_unmatched_brackets_residue_accepted() {
        // Known limitation: a lone bracket survives the strip pass
        let reduced = reduce("a [dangling bracket", 150);
        assert_eq!(reduced, "a [dangling bracket");
    }

    #[test]
    fn test_first_heading_h1() {
        let content = "# My Project\n\nSome intro text.";
        assert_eq!(first_heading(content), Some("My Project".to_string()));
    }

    #[test]
    fn test_first_heading_skips_leading_text() {
        let content = "badge line\n\n## Getting Started\n\nbody";
        assert_eq!(first_heading(content), Some("Getting Started".to_string()));
    }

    #[test]
    fn test_first_heading_flattens_formatting() {
        let content = "# The `core` **API**";
        assert_eq!(first_heading(content), Some("The core API".to_string()));
    }

    #[test]
    fn test_first_heading_none_without_headings() {
        assert_eq!(first_heading("just a paragraph"), None);
        assert_eq!(first_heading(""), None);
    }
}
