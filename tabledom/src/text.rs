use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pad `s` with trailing spaces to `width` display columns.
/// Strings already at least that wide are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - current))
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
