use crate::{
    traits::FontType,
    types::{FontVariant, Helvetica, Times},
};

/// Font families selectable in the editor, each mapped onto a PDF Standard-14 family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Serif,
    SansSerif,
}

impl FontFamily {
    /// lenient lookup used when decoding editor settings
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "times-roman" | "times" | "times new roman" | "serif" => Some(FontFamily::Serif),
            "helvetica" | "arial" | "sans-serif" | "sansserif" | "sans" => Some(FontFamily::SansSerif),
            _ => None,
        }
    }

    /// the name the editor sends over the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            FontFamily::Serif => "Times-Roman",
            FontFamily::SansSerif => "Helvetica",
        }
    }

    /// PostScript base font name for a variant of this family
    pub fn base_font(&self, variant: FontVariant) -> &'static str {
        match (self, variant) {
            (FontFamily::Serif, FontVariant::Regular) => "Times-Roman",
            (FontFamily::Serif, FontVariant::Bold) => "Times-Bold",
            (FontFamily::Serif, FontVariant::Italic) => "Times-Italic",
            (FontFamily::Serif, FontVariant::BoldItalic) => "Times-BoldItalic",
            (FontFamily::SansSerif, FontVariant::Regular) => "Helvetica",
            (FontFamily::SansSerif, FontVariant::Bold) => "Helvetica-Bold",
            (FontFamily::SansSerif, FontVariant::Italic) => "Helvetica-Oblique",
            (FontFamily::SansSerif, FontVariant::BoldItalic) => "Helvetica-BoldOblique",
        }
    }

    /// CSS `font-family` stack used by the preview
    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::Serif => "\"Times New Roman\", Times, serif",
            FontFamily::SansSerif => "Arial, Helvetica, sans-serif",
        }
    }

    /// advance width tables for the family
    pub fn metrics(&self) -> &'static dyn FontType {
        match self {
            FontFamily::Serif => &Times,
            FontFamily::SansSerif => &Helvetica,
        }
    }
}
