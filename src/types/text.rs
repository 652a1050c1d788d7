/// One entry of the document split on `\n`, with its derived attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub raw: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(raw: &'a str) -> Self {
        Line { raw }
    }

    pub fn trimmed(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// chapter titles and the literal references marker, compared on an uppercased copy
    pub fn is_heading(&self) -> bool {
        let upper = self.trimmed().to_uppercase();
        upper.starts_with("CHAPTER") || upper == "REFERENCES"
    }
}

/// iterates the lines of a document in order
pub fn lines(document: &str) -> impl Iterator<Item = Line<'_>> {
    document.split('\n').map(Line::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_line_is_blank() {
        assert!(Line::new("   \t ").is_blank());
        assert!(!Line::new("  a ").is_blank());
    }

    #[test]
    fn heading_detection_ignores_case_and_padding() {
        assert!(Line::new("chapter 1").is_heading());
        assert!(Line::new("  CHAPTER ONE: Beginnings  ").is_heading());
        assert!(Line::new("Chapters").is_heading());
        assert!(Line::new("references").is_heading());
    }

    #[test]
    fn references_must_match_exactly() {
        assert!(!Line::new("References cited").is_heading());
        assert!(!Line::new("See chapter 2").is_heading());
    }

    #[test]
    fn trimmed_text_keeps_original_case() {
        assert_eq!(Line::new("  Chapter 3 ").trimmed(), "Chapter 3");
    }

    #[test]
    fn splitting_keeps_trailing_empty_line() {
        assert_eq!(lines("a\n").count(), 2);
        assert_eq!(lines("").count(), 1);
    }
}
