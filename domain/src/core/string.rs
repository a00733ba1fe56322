//! String utilities for the domain layer.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe)
///
/// Cuts at the nearest character boundary at or below `max_len - 3`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Collapse every run of whitespace (including newlines) to a single space.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("WP 99/2024", 20), "WP 99/2024");
        assert_eq!(truncate("Search e-Courts for", 9), "Search...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Each Telugu code point here is 3 bytes
        let text = "గుంటూరు";
        assert_eq!(truncate(text, 64), text);
        let cut = truncate(text, 10);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 10);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\n  b\tc "), "a b c");
    }
}
