use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Emphasis, Span};

/// a complete `_..._` or `*...*` token, leftmost match wins
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_[^_]+_|\*[^*]+\*").expect("BUG: invalid MARKER_RE regex literal")
});

/// Splits a trimmed line into emphasis spans.
///
/// Matching is purely lexical: only complete marker tokens become emphasis, every other
/// underscore or asterisk stays in the surrounding plain text. Empty plain fragments between
/// adjacent tokens are skipped.
pub fn segment(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for marker in MARKER_RE.find_iter(text) {
        if marker.start() > cursor {
            spans.push(Span::plain(&text[cursor..marker.start()]));
        }

        let token = marker.as_str();
        let emphasis = if token.starts_with('_') {
            Emphasis::Italic
        } else {
            Emphasis::Bold
        };

        // delimiters are single ASCII bytes
        spans.push(Span::new(&token[1..token.len() - 1], emphasis));
        cursor = marker.end();
    }

    if cursor < text.len() {
        spans.push(Span::plain(&text[cursor..]));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(spans: &[Span]) -> Vec<(Emphasis, &str)> {
        spans.iter().map(|span| (span.emphasis, span.text.as_str())).collect()
    }

    #[test]
    fn mixed_markers_keep_boundary_text() {
        let spans = segment("plain _italic_ *bold* end");

        assert_eq!(
            shape(&spans),
            vec![
                (Emphasis::None, "plain "),
                (Emphasis::Italic, "italic"),
                (Emphasis::None, " "),
                (Emphasis::Bold, "bold"),
                (Emphasis::None, " end"),
            ]
        );
    }

    #[test]
    fn unmatched_marker_stays_literal() {
        assert_eq!(shape(&segment("a _b end")), vec![(Emphasis::None, "a _b end")]);
        assert_eq!(shape(&segment("5 * 3 = 15")), vec![(Emphasis::None, "5 * 3 = 15")]);
    }

    #[test]
    fn empty_marker_bodies_stay_literal() {
        assert_eq!(shape(&segment("__")), vec![(Emphasis::None, "__")]);
        assert_eq!(shape(&segment("a ** b")), vec![(Emphasis::None, "a ** b")]);
    }

    #[test]
    fn adjacent_markers_produce_no_empty_spans() {
        assert_eq!(
            shape(&segment("_a_*b*")),
            vec![(Emphasis::Italic, "a"), (Emphasis::Bold, "b")]
        );
    }

    #[test]
    fn markers_do_not_nest() {
        // the bold token is found first and keeps its underscores
        assert_eq!(shape(&segment("*a _b_ c*")), vec![(Emphasis::Bold, "a _b_ c")]);
    }

    #[test]
    fn leftover_delimiter_after_match_is_plain() {
        assert_eq!(
            shape(&segment("_one_ two_")),
            vec![(Emphasis::Italic, "one"), (Emphasis::None, " two_")]
        );
    }

    #[test]
    fn whole_line_marker() {
        assert_eq!(shape(&segment("_et al._")), vec![(Emphasis::Italic, "et al.")]);
    }
}
