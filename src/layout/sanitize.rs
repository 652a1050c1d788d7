/// Normalizes pasted text into printable ASCII plus `\n`.
///
/// Typographic punctuation is translated first (smart quotes, dashes, ellipsis, bullets, tabs),
/// then every remaining character outside the set is dropped. Untranslated characters, `\r`
/// included, are deleted, never substituted: CRLF collapses to `\n` and a lone CR joins its
/// neighbours.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' => out.push('-'),
            '\t' => out.push_str("    "),
            '\n' | ' '..='~' => out.push(ch),
            _ => {}
        }
    }

    out
}

/// true when `text` only holds characters `sanitize` lets through
pub fn is_sanitized(text: &str) -> bool {
    text.chars().all(|ch| ch == '\n' || (' '..='~').contains(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn smart_punctuation_becomes_ascii() {
        assert_eq!(sanitize("\u{2018}hi\u{2019}"), "'hi'");
        assert_eq!(sanitize("\u{201C}quoted\u{201D}"), "\"quoted\"");
        assert_eq!(sanitize("1990\u{2013}1995 \u{2014} done"), "1990-1995 - done");
        assert_eq!(sanitize("wait\u{2026}"), "wait...");
        assert_eq!(sanitize("\u{2022} item"), "- item");
    }

    #[test]
    fn tabs_expand_to_four_spaces() {
        assert_eq!(sanitize("\tindented"), "    indented");
    }

    #[test]
    fn untranslated_characters_are_deleted() {
        assert_eq!(sanitize("caf\u{e9} \u{1F600} \u{4E2D}x"), "caf  x");
        assert_eq!(sanitize("bell\u{7}\u{0}end\u{7F}"), "bellend");
    }

    #[test]
    fn carriage_returns_are_deleted() {
        assert_eq!(sanitize("a\r\nb\rc\n"), "a\nbc\n");
        assert_eq!(sanitize("a\rb"), "ab");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "",
            "plain ascii",
            "\u{201C}Smart\u{201D} \u{2014} text\u{2026}\tand\r\nmore \u{e9}\u{2022}",
            "\r\r\n\n\t\t",
            "\u{2026}\u{2026}",
        ];

        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn output_stays_within_character_set() {
        let input: String = (0u32..0x3000).filter_map(char::from_u32).collect();
        let output = sanitize(&input);

        assert!(is_sanitized(&output));
        assert!(output.contains("..."));
    }
}
