//! String utilities for the domain layer.

/// Shorten text for log lines, cutting on a character boundary.
///
/// `max_chars` counts characters, not bytes. An ellipsis is appended when
/// anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.char_indices();
    match chars.nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…", &s[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(preview("Where is my order?", 50), "Where is my order?");
        assert_eq!(preview("exact", 5), "exact");
    }

    #[test]
    fn test_long_text_cut() {
        assert_eq!(preview("Where is my order?", 5), "Where…");
    }

    #[test]
    fn test_multibyte_counts_chars() {
        assert_eq!(preview("🐶🐱🐰", 2), "🐶🐱…");
        assert_eq!(preview("café au lait", 4), "café…");
    }
}
