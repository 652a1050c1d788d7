use std::sync::LazyLock;

use regex::Regex;

static ET_AL_INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^_])et al\.([^_])").expect("BUG: invalid ET_AL_INLINE_RE regex literal")
});

static ET_AL_LEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^et al\.").expect("BUG: invalid ET_AL_LEADING_RE regex literal")
});

/// Italicizes the citation abbreviation `et al.` with underscore markers.
///
/// An inline occurrence needs a non-underscore character on both sides, so an occurrence that
/// is already marked, or one that ends the text, is left untouched. Occurrences starting a line
/// are handled by a second pass.
pub fn auto_format(text: &str) -> String {
    let text = ET_AL_INLINE_RE.replace_all(text, "${1}_et al._${2}");
    ET_AL_LEADING_RE.replace_all(&text, "_et al._").into_owned()
}
