//! Whitespace handling shared by the blank-input check, segment trimming
//! and the Sthana test.
//!
//! The information separators U+001C..U+001F count as whitespace here, on
//! top of Unicode `White_Space`.

/// Whitespace as used for trimming and splitting
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// True for empty or whitespace-only text
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn normalize(text: &str) -> String {
    text.split(is_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
