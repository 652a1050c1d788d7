//! Standard-14 advance widths for the printable ASCII range (0x20..=0x7E), WinAnsi encoding.

use crate::traits::FontType;

const FIRST_CHAR: u32 = 0x20;
const MISSING_WIDTH: u16 = 500;

type WidthTable = [u16; 95];

fn lookup(table: &WidthTable, ch: char) -> u16 {
    (ch as u32)
        .checked_sub(FIRST_CHAR)
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or(MISSING_WIDTH)
}

/// Times-Roman, Times-Bold, Times-Italic, Times-BoldItalic
#[derive(Debug, Clone, Copy, Default)]
pub struct Times;

/// Helvetica, Helvetica-Bold, Helvetica-Oblique, Helvetica-BoldOblique
#[derive(Debug, Clone, Copy, Default)]
pub struct Helvetica;

impl FontType for Times {
    fn regular(&self, ch: char) -> u16 {
        lookup(&TIMES_ROMAN, ch)
    }

    fn bold(&self, ch: char) -> u16 {
        lookup(&TIMES_BOLD, ch)
    }

    fn italic(&self, ch: char) -> u16 {
        lookup(&TIMES_ITALIC, ch)
    }

    fn bold_italic(&self, ch: char) -> u16 {
        lookup(&TIMES_BOLD_ITALIC, ch)
    }
}

// oblique faces share the upright widths
impl FontType for Helvetica {
    fn regular(&self, ch: char) -> u16 {
        lookup(&HELVETICA, ch)
    }

    fn bold(&self, ch: char) -> u16 {
        lookup(&HELVETICA_BOLD, ch)
    }

    fn italic(&self, ch: char) -> u16 {
        lookup(&HELVETICA, ch)
    }

    fn bold_italic(&self, ch: char) -> u16 {
        lookup(&HELVETICA_BOLD, ch)
    }
}

#[rustfmt::skip]
const TIMES_ROMAN: WidthTable = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: WidthTable = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: WidthTable = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];

#[rustfmt::skip]
const TIMES_BOLD_ITALIC: WidthTable = [
    250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
    611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
    333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
    500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
];

#[rustfmt::skip]
const HELVETICA: WidthTable = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: WidthTable = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FontVariant;

    #[test]
    fn space_widths_match_afm() {
        assert_eq!(Times.regular(' '), 250);
        assert_eq!(Helvetica.regular(' '), 278);
    }

    #[test]
    fn last_table_entry_is_tilde() {
        assert_eq!(Times.regular('~'), 541);
        assert_eq!(Helvetica.bold('~'), 584);
    }

    #[test]
    fn characters_outside_table_use_missing_width() {
        assert_eq!(Times.regular('\n'), MISSING_WIDTH);
        assert_eq!(Helvetica.regular('é'), MISSING_WIDTH);
    }

    #[test]
    fn text_width_scales_with_font_size() {
        // W = 944 in Times-Roman
        assert_eq!(Times.text_width("W", FontVariant::Regular, 10.0), 9.44);
        assert_eq!(Times.text_width("WW", FontVariant::Regular, 10.0), 18.88);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let text = "CHAPTER ONE";
        let regular = Helvetica.text_width(text, FontVariant::Regular, 12.0);
        let bold = Helvetica.text_width(text, FontVariant::Bold, 12.0);
        assert!(bold > regular);
    }
}
