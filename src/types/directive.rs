use serde::Serialize;

use crate::types::TypographySettings;

/// Horizontal placement of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAlignment {
    Left,
    Center,
}

/// Line level weight, headings are bold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weight {
    Normal,
    Bold,
}

/// Inline emphasis carried by a `Span`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Emphasis {
    #[default]
    None,
    Italic,
    Bold,
}

/// run of text sharing one emphasis, markers already stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub emphasis: Emphasis,
    pub text: String,
}

impl Span {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Span {
            emphasis,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Span::new(text, Emphasis::None)
    }
}

/// one non-blank input line, ready to draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextLine {
    pub alignment: TextAlignment,
    pub weight: Weight,
    pub spans: Vec<Span>,
}

impl TextLine {
    /// concatenated span text, the line as displayed
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

/// Renderer-agnostic layout instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum LayoutDirective {
    /// advances the vertical cursor by one line height
    Blank,
    /// starts a new page, emitted before every heading except the first rendered line
    PageBreak,
    TextLine(TextLine),
}

/// # Output of the layout interpreter
///
/// Pairs the directive sequence with the settings snapshot it was produced for, so every renderer
/// receives exactly the same input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub settings: TypographySettings,
    pub directives: Vec<LayoutDirective>,
}

impl Layout {
    pub fn page_breaks(&self) -> usize {
        self.directives
            .iter()
            .filter(|directive| **directive == LayoutDirective::PageBreak)
            .count()
    }

    pub fn text_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.directives.iter().filter_map(|directive| match directive {
            LayoutDirective::TextLine(line) => Some(line),
            _ => None,
        })
    }
}
