use crate::types::{Emphasis, Weight};

/// Concrete face of a font family a renderer draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontVariant {
    pub const ALL: [FontVariant; 4] = [
        FontVariant::Regular,
        FontVariant::Bold,
        FontVariant::Italic,
        FontVariant::BoldItalic,
    ];

    /// combines the line weight with a span's emphasis
    pub fn resolve(weight: Weight, emphasis: Emphasis) -> Self {
        match (weight, emphasis) {
            (Weight::Bold, Emphasis::Italic) => FontVariant::BoldItalic,
            (Weight::Bold, _) | (_, Emphasis::Bold) => FontVariant::Bold,
            (Weight::Normal, Emphasis::Italic) => FontVariant::Italic,
            (Weight::Normal, Emphasis::None) => FontVariant::Regular,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_weight_combines_with_emphasis() {
        assert_eq!(FontVariant::resolve(Weight::Bold, Emphasis::None), FontVariant::Bold);
        assert_eq!(FontVariant::resolve(Weight::Bold, Emphasis::Italic), FontVariant::BoldItalic);
        assert_eq!(FontVariant::resolve(Weight::Bold, Emphasis::Bold), FontVariant::Bold);
    }

    #[test]
    fn body_weight_follows_emphasis() {
        assert_eq!(FontVariant::resolve(Weight::Normal, Emphasis::None), FontVariant::Regular);
        assert_eq!(FontVariant::resolve(Weight::Normal, Emphasis::Italic), FontVariant::Italic);
        assert_eq!(FontVariant::resolve(Weight::Normal, Emphasis::Bold), FontVariant::Bold);
    }
}
