use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::FontFamily;

/// smallest font size the editor accepts, in points
pub const MIN_FONT_SIZE: u8 = 8;
/// largest font size the editor accepts, in points
pub const MAX_FONT_SIZE: u8 = 72;

/// Line spacing options offered by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSpacing {
    Single,
    #[default]
    OneAndHalf,
    Double,
}

impl LineSpacing {
    pub fn factor(&self) -> f32 {
        match self {
            LineSpacing::Single => 1.0,
            LineSpacing::OneAndHalf => 1.5,
            LineSpacing::Double => 2.0,
        }
    }

    /// clamps into [1.0, 2.0] and snaps to the nearest half step
    pub fn from_factor(factor: f64) -> Self {
        let snapped = (factor.clamp(1.0, 2.0) * 2.0).round() / 2.0;

        if snapped <= 1.0 {
            LineSpacing::Single
        } else if snapped >= 2.0 {
            LineSpacing::Double
        } else {
            LineSpacing::OneAndHalf
        }
    }
}

/// # Typography snapshot consumed per render
///
/// Deserialized from the editor's wire form:
/// ```json
/// { "font": "Times-Roman", "fontSize": "12", "lineSpacing": "1.5" }
/// ```
/// Every field is optional and decoded leniently, a missing or unparseable value falls back to
/// the default (Serif, 12pt, 1.5) and out of range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "WireSettings", into = "WireSettings")]
pub struct TypographySettings {
    pub font_family: FontFamily,
    pub font_size: u8,
    pub line_spacing: LineSpacing,
}

impl TypographySettings {
    pub fn new(font_family: FontFamily, font_size: u8, line_spacing: LineSpacing) -> Self {
        TypographySettings {
            font_family,
            font_size: font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            line_spacing,
        }
    }

    pub fn font_size_pt(&self) -> f32 {
        f32::from(self.font_size)
    }

    /// vertical advance of one rendered line, shared by every renderer
    pub fn line_height(&self) -> f32 {
        self.font_size_pt() * self.line_spacing.factor()
    }
}

impl Default for TypographySettings {
    /// - Font family: Serif
    /// - Font size: 12
    /// - Line spacing: 1.5
    fn default() -> Self {
        TypographySettings {
            font_family: FontFamily::Serif,
            font_size: 12,
            line_spacing: LineSpacing::OneAndHalf,
        }
    }
}

/// JSON shape exchanged with the editor and the export backend
#[derive(Debug, Deserialize, Serialize)]
struct WireSettings {
    #[serde(default)]
    font: Option<Value>,
    #[serde(default, rename = "fontSize")]
    font_size: Option<Value>,
    #[serde(default, rename = "lineSpacing")]
    line_spacing: Option<Value>,
}

impl From<WireSettings> for TypographySettings {
    fn from(wire: WireSettings) -> Self {
        let defaults = TypographySettings::default();

        let font_family = wire
            .font
            .as_ref()
            .and_then(Value::as_str)
            .and_then(FontFamily::from_name)
            .unwrap_or(defaults.font_family);

        let font_size = wire
            .font_size
            .as_ref()
            .and_then(leading_integer)
            .filter(|size| *size != 0)
            .map(|size| size.clamp(i64::from(MIN_FONT_SIZE), i64::from(MAX_FONT_SIZE)) as u8)
            .unwrap_or(defaults.font_size);

        let line_spacing = wire
            .line_spacing
            .as_ref()
            .and_then(leading_float)
            .filter(|factor| *factor != 0.0)
            .map(LineSpacing::from_factor)
            .unwrap_or(defaults.line_spacing);

        TypographySettings {
            font_family,
            font_size,
            line_spacing,
        }
    }
}

impl From<TypographySettings> for WireSettings {
    fn from(settings: TypographySettings) -> Self {
        WireSettings {
            font: Some(Value::from(settings.font_family.wire_name())),
            font_size: Some(Value::from(settings.font_size)),
            line_spacing: Some(Value::from(f64::from(settings.line_spacing.factor()))),
        }
    }
}

/// accepts `14`, `14.7` or `"14pt"`, ignoring anything after the leading digits
fn leading_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.is_finite()).map(|n| n.trunc() as i64)),
        Value::String(text) => {
            let text = text.trim_start();
            let end = numeric_prefix_len(text, false);
            text[..end].parse::<i64>().ok()
        }
        _ => None,
    }
}

/// accepts `1.5` or `"1.5"`, ignoring anything after the leading number
fn leading_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim_start();
            let end = numeric_prefix_len(text, true);
            text[..end].parse::<f64>().ok()
        }
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn numeric_prefix_len(text: &str, allow_fraction: bool) -> usize {
    let mut seen_dot = false;

    for (index, ch) in text.char_indices() {
        match ch {
            '+' | '-' if index == 0 => {}
            '0'..='9' => {}
            '.' if allow_fraction && !seen_dot => seen_dot = true,
            _ => return index,
        }
    }

    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> TypographySettings {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        assert_eq!(decode(json!({})), TypographySettings::default());
    }

    #[test]
    fn decodes_editor_wire_form() {
        let settings = decode(json!({
            "font": "Helvetica",
            "fontSize": "14",
            "lineSpacing": "2.0"
        }));

        assert_eq!(settings.font_family, FontFamily::SansSerif);
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.line_spacing, LineSpacing::Double);
    }

    #[test]
    fn numbers_and_prefixed_strings_are_accepted() {
        let settings = decode(json!({ "fontSize": "16pt", "lineSpacing": 1.0 }));
        assert_eq!(settings.font_size, 16);
        assert_eq!(settings.line_spacing, LineSpacing::Single);

        let settings = decode(json!({ "fontSize": 10.9 }));
        assert_eq!(settings.font_size, 10);
    }

    #[test]
    fn unparseable_or_zero_values_use_defaults() {
        let settings = decode(json!({
            "font": "Comic Sans",
            "fontSize": "large",
            "lineSpacing": 0
        }));

        assert_eq!(settings, TypographySettings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let settings = decode(json!({ "fontSize": 400, "lineSpacing": "3" }));
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
        assert_eq!(settings.line_spacing, LineSpacing::Double);

        let settings = decode(json!({ "fontSize": "-4", "lineSpacing": 0.2 }));
        assert_eq!(settings.font_size, MIN_FONT_SIZE);
        assert_eq!(settings.line_spacing, LineSpacing::Single);
    }

    #[test]
    fn spacing_snaps_to_nearest_option() {
        assert_eq!(LineSpacing::from_factor(1.2), LineSpacing::Single);
        assert_eq!(LineSpacing::from_factor(1.4), LineSpacing::OneAndHalf);
        assert_eq!(LineSpacing::from_factor(1.8), LineSpacing::Double);
    }

    #[test]
    fn encodes_canonical_wire_form() {
        let settings = TypographySettings::new(FontFamily::SansSerif, 20, LineSpacing::Single);
        let value = serde_json::to_value(settings).unwrap();

        assert_eq!(
            value,
            json!({ "font": "Helvetica", "fontSize": 20, "lineSpacing": 1.0 })
        );
        assert_eq!(decode(value), settings);
    }

    #[test]
    fn line_height_scales_with_spacing() {
        let settings = TypographySettings::new(FontFamily::Serif, 12, LineSpacing::Double);
        assert_eq!(settings.line_height(), 24.0);
    }
}
