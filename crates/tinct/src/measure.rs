//! Width measurement and padding for styled text.

use unicode_width::UnicodeWidthStr;

/// Remove ANSI CSI escape sequences from a string.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // Consume parameter bytes up to and including the final letter
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

/// Visible terminal width of `s`, ignoring ANSI escapes.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Right-pad `s` with spaces to a visible width of at least `width`.
#[must_use]
pub fn pad_to(s: &str, width: usize) -> String {
    let current = visible_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.push_str(&" ".repeat(width - current));
    out
}

/// Truncate plain (unstyled) text to a visible width, appending `…` when cut.
///
/// Callers styling the result should truncate first, then style.
#[must_use]
pub fn truncate_plain(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_sgr() {
        assert_eq!(strip_ansi("\x1b[1mbold\x1b[0m"), "bold");
        assert_eq!(strip_ansi("\x1b[38;2;1;2;3mrgb\x1b[0m"), "rgb");
    }

    #[test]
    fn strip_ansi_keeps_plain_text() {
        assert_eq!(strip_ansi("plain text"), "plain text");
    }

    #[test]
    fn visible_width_ignores_escapes() {
        assert_eq!(visible_width("\x1b[1mfour\x1b[0m"), 4);
    }

    #[test]
    fn visible_width_counts_wide_chars() {
        assert_eq!(visible_width("日本"), 4);
    }

    #[test]
    fn pad_to_fills_short_strings() {
        assert_eq!(pad_to("ab", 5), "ab   ");
    }

    #[test]
    fn pad_to_leaves_long_strings() {
        assert_eq!(pad_to("abcdef", 3), "abcdef");
    }

    #[test]
    fn pad_to_measures_styled_text() {
        let styled = "\x1b[1mab\x1b[0m";
        assert_eq!(visible_width(&pad_to(styled, 4)), 4);
    }

    #[test]
    fn truncate_plain_cuts_with_ellipsis() {
        assert_eq!(truncate_plain("abcdef", 4), "abc…");
    }

    #[test]
    fn truncate_plain_keeps_fitting_text() {
        assert_eq!(truncate_plain("abc", 4), "abc");
    }

    #[test]
    fn truncate_plain_zero_width() {
        assert_eq!(truncate_plain("abc", 0), "");
    }
}
