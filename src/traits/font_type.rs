use crate::types::FontVariant;

/// Advance widths of a font family, in thousandths of the font size (AFM units).
///
/// Registering a new family means providing the width of every printable ASCII character for
/// all four variants (regular, bold, italic, bold-italic). Characters without an entry fall back
/// to an average width.
pub trait FontType {
    fn regular(&self, ch: char) -> u16;
    fn bold(&self, ch: char) -> u16;
    fn italic(&self, ch: char) -> u16;
    fn bold_italic(&self, ch: char) -> u16;

    /// width of a single character in points
    fn char_width(&self, ch: char, variant: FontVariant, font_size: f32) -> f32 {
        let units = match variant {
            FontVariant::Regular => self.regular(ch),
            FontVariant::Bold => self.bold(ch),
            FontVariant::Italic => self.italic(ch),
            FontVariant::BoldItalic => self.bold_italic(ch),
        };

        f32::from(units) * font_size / 1000.0
    }

    /// width of a run of text in points
    fn text_width(&self, text: &str, variant: FontVariant, font_size: f32) -> f32 {
        text.chars()
            .map(|ch| self.char_width(ch, variant, font_size))
            .sum()
    }
}
