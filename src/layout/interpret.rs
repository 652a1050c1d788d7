use crate::{
    layout::segment,
    types::{
        lines, Layout, LayoutDirective, TextAlignment, TextLine, TypographySettings, Weight,
    },
};

/// Turns sanitized text into the directive sequence both renderers consume.
///
/// - blank lines become `Blank` and are never heading candidates
/// - headings are centered and bold, and preceded by `PageBreak` unless they are the first
///   non-blank line of the document
/// - every other line is left aligned body text split into emphasis spans
///
/// Total over any input: the worst case is a single plain span holding the trimmed line.
pub fn interpret(text: &str, settings: &TypographySettings) -> Layout {
    let mut directives = Vec::new();
    let mut first_rendered = true;

    for line in lines(text) {
        if line.is_blank() {
            directives.push(LayoutDirective::Blank);
            continue;
        }

        let heading = line.is_heading();

        if heading && !first_rendered {
            directives.push(LayoutDirective::PageBreak);
        }

        let (alignment, weight) = match heading {
            true => (TextAlignment::Center, Weight::Bold),
            false => (TextAlignment::Left, Weight::Normal),
        };

        directives.push(LayoutDirective::TextLine(TextLine {
            alignment,
            weight,
            spans: segment(line.trimmed()),
        }));

        first_rendered = false;
    }

    tracing::trace!(directives = directives.len(), "interpreted document");

    Layout {
        settings: *settings,
        directives,
    }
}
