//! Helpful utilities for working with text.

/// Maximum length of comment and poll option text in rendered output.
pub const MAX_TEXT_LEN: usize = 70;

/// Shortens `text` to its first `max_len` bytes followed by `...`, if it
/// is longer than `max_len` bytes.
///
/// Note that the cut counts bytes, not characters: a multi-byte character
/// straddling the cut is replaced by U+FFFD REPLACEMENT CHARACTER.
///
/// # Examples
///
/// ```
/// use hn::text::truncate;
/// assert_eq!(truncate("Hello, world", 5), "Hello...");
/// assert_eq!(truncate("Hello", 5), "Hello");
/// ```
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.len() > max_len {
        let head = String::from_utf8_lossy(&text.as_bytes()[..max_len]);
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Returns `singular` if `count` is exactly 1, or `plural` otherwise.
///
/// # Examples
///
/// ```
/// use hn::text::pluralize;
/// assert_eq!(pluralize(1, "reply", "replies"), "reply");
/// assert_eq!(pluralize(0, "reply", "replies"), "replies");
/// assert_eq!(pluralize(4, "reply", "replies"), "replies");
/// ```
pub fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_does_not_truncate_short_text() {
        let text = "a".repeat(MAX_TEXT_LEN);
        assert_eq!(truncate(&text, MAX_TEXT_LEN), text);
    }

    #[test]
    fn it_truncates_long_text() {
        let text = "b".repeat(MAX_TEXT_LEN + 1);
        let expected = format!("{}...", "b".repeat(MAX_TEXT_LEN));
        assert_eq!(truncate(&text, MAX_TEXT_LEN), expected);
    }

    #[test]
    fn it_truncates_by_bytes() {
        // "é" is two bytes, so the cut lands in the middle of it.
        let text = "aé";
        assert_eq!(truncate(text, 2), "a\u{FFFD}...");
    }

    #[test]
    fn it_pluralizes_negative_counts() {
        assert_eq!(pluralize(-1, "pt", "pts"), "pts");
    }
}
