use crate::{
    traits::Render,
    types::{Emphasis, TextAlignment, TextLine, TypographySettings, Weight},
};

/// Screen renderer: maps each directive onto one HTML element.
///
/// Styling mirrors the PDF output: same family, size in px, and line height as a unitless
/// factor so `Blank` and `TextLine` advance by the same amount.
pub struct HtmlPreview {
    html: String,
    spacing: f32,
}

impl HtmlPreview {
    pub fn new(settings: &TypographySettings) -> Self {
        let spacing = settings.line_spacing.factor();
        let html = format!(
            "<div class=\"idraft-preview\" style=\"font-family: {}; font-size: {}px; line-height: {}\">\n",
            escape(settings.font_family.css_stack()),
            settings.font_size,
            spacing
        );

        HtmlPreview { html, spacing }
    }
}

impl Render for HtmlPreview {
    type Output = String;

    fn blank(&mut self) {
        self.html
            .push_str(&format!("<div style=\"height: {}em\"></div>\n", self.spacing));
    }

    fn page_break(&mut self) {
        self.html
            .push_str("<div class=\"page-break\" style=\"break-before: page\"></div>\n");
    }

    fn text_line(&mut self, line: &TextLine) {
        let align = match line.alignment {
            TextAlignment::Left => "left",
            TextAlignment::Center => "center",
        };
        let weight = match line.weight {
            Weight::Normal => "normal",
            Weight::Bold => "bold",
        };

        self.html.push_str(&format!(
            "<div style=\"text-align: {align}; font-weight: {weight}\">"
        ));

        for span in &line.spans {
            let tag = match span.emphasis {
                Emphasis::None => "span",
                Emphasis::Italic => "i",
                Emphasis::Bold => "b",
            };
            self.html
                .push_str(&format!("<{tag}>{}</{tag}>", escape(&span.text)));
        }

        self.html.push_str("</div>\n");
    }

    fn finish(mut self) -> String {
        self.html.push_str("</div>\n");
        self.html
    }
}

/// escapes text for use in element content and double-quoted attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }

    out
}
