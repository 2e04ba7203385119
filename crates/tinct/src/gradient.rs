//! Gradient text and bar helpers.
//!
//! Gradients interpolate per character between hex endpoints, degrading to
//! plain text when the profile has no color or an endpoint fails to parse.

use crate::color::{blend, Color, ColorProfile};

/// Render `text` with a per-character foreground fade from `from` to `to`.
#[must_use]
pub fn gradient_text(text: &str, from: &Color, to: &Color, profile: ColorProfile) -> String {
    let (Some(a), Some(b)) = (from.as_rgb(), to.as_rgb()) else {
        return text.to_string();
    };
    if profile == ColorProfile::Ascii {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(text.len() * 8);
    for (i, c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            out.push(*c);
            continue;
        }
        let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.5 };
        let (r, g, bl) = blend(a, b, t);
        out.push_str(&Color::new(format!("#{r:02x}{g:02x}{bl:02x}")).to_ansi_fg(profile));
        out.push(*c);
        out.push_str("\x1b[0m");
    }
    out
}

/// A bar of `width` copies of `ch`, faded from `from` to `to`.
#[must_use]
pub fn gradient_bar(
    width: usize,
    ch: char,
    from: &Color,
    to: &Color,
    profile: ColorProfile,
) -> String {
    let (Some(a), Some(b)) = (from.as_rgb(), to.as_rgb()) else {
        return ch.to_string().repeat(width);
    };
    if profile == ColorProfile::Ascii {
        return ch.to_string().repeat(width);
    }

    let mut out = String::with_capacity(width * 16);
    for i in 0..width {
        let t = if width > 1 {
            i as f64 / (width - 1) as f64
        } else {
            0.5
        };
        let (r, g, bl) = blend(a, b, t);
        out.push_str(&Color::new(format!("#{r:02x}{g:02x}{bl:02x}")).to_ansi_fg(profile));
        out.push(ch);
        out.push_str("\x1b[0m");
    }
    out
}

/// Sample a piecewise-linear gradient over `stops` at `t` in [0,1].
///
/// Returns `None` when there are no parseable stops.
#[must_use]
pub fn sample(stops: &[Color], t: f64) -> Option<(u8, u8, u8)> {
    let rgb: Vec<(u8, u8, u8)> = stops.iter().filter_map(Color::as_rgb).collect();
    match rgb.len() {
        0 => None,
        1 => Some(rgb[0]),
        n => {
            let t = t.clamp(0.0, 1.0);
            let span = (n - 1) as f64;
            let pos = t * span;
            let idx = (pos.floor() as usize).min(n - 2);
            let local = pos - idx as f64;
            Some(blend(rgb[idx], rgb[idx + 1], local))
        }
    }
}

/// A row of spaces `width` wide, background-washed across `stops`.
///
/// Used for the header band; with an unusable profile or stops it renders
/// plain spaces.
#[must_use]
pub fn wash_row(width: usize, stops: &[Color], profile: ColorProfile) -> String {
    if profile == ColorProfile::Ascii || stops.iter().all(|c| c.as_rgb().is_none()) {
        return " ".repeat(width);
    }
    let mut out = String::with_capacity(width * 16);
    for i in 0..width {
        let t = if width > 1 {
            i as f64 / (width - 1) as f64
        } else {
            0.5
        };
        if let Some((r, g, b)) = sample(stops, t) {
            out.push_str(&Color::new(format!("#{r:02x}{g:02x}{b:02x}")).to_ansi_bg(profile));
            out.push(' ');
            out.push_str("\x1b[0m");
        } else {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::visible_width;

    fn amber() -> Color {
        Color::from("#fbbf24")
    }

    fn orange() -> Color {
        Color::from("#f97316")
    }

    #[test]
    fn gradient_text_starts_and_ends_at_endpoints() {
        let out = gradient_text("ab", &amber(), &orange(), ColorProfile::TrueColor);
        assert!(out.starts_with("\x1b[38;2;251;191;36m"));
        assert!(out.contains("\x1b[38;2;249;115;22m"));
    }

    #[test]
    fn gradient_text_skips_whitespace() {
        let out = gradient_text("a b", &amber(), &orange(), ColorProfile::TrueColor);
        // The space is emitted bare, with no escape attached to it.
        assert!(out.contains("a\x1b[0m \x1b[38;2;"));
    }

    #[test]
    fn gradient_text_plain_on_ascii() {
        let out = gradient_text("hello", &amber(), &orange(), ColorProfile::Ascii);
        assert_eq!(out, "hello");
    }

    #[test]
    fn gradient_text_plain_on_bad_endpoint() {
        let bad = Color::from("nope");
        let out = gradient_text("hello", &bad, &orange(), ColorProfile::TrueColor);
        assert_eq!(out, "hello");
    }

    #[test]
    fn gradient_bar_has_requested_visible_width() {
        let out = gradient_bar(10, '█', &amber(), &orange(), ColorProfile::TrueColor);
        assert_eq!(visible_width(&out), 10);
    }

    #[test]
    fn single_cell_bar_uses_midpoint() {
        let out = gradient_bar(1, '█', &Color::from("#000000"), &Color::from("#ffffff"),
            ColorProfile::TrueColor);
        assert!(out.contains("128;128;128"));
    }

    #[test]
    fn sample_hits_stops_and_midpoints() {
        let stops = [
            Color::from("#000000"),
            Color::from("#808080"),
            Color::from("#ffffff"),
        ];
        assert_eq!(sample(&stops, 0.0), Some((0, 0, 0)));
        assert_eq!(sample(&stops, 0.5), Some((0x80, 0x80, 0x80)));
        assert_eq!(sample(&stops, 1.0), Some((255, 255, 255)));
    }

    #[test]
    fn sample_empty_stops_is_none() {
        assert_eq!(sample(&[], 0.5), None);
    }

    #[test]
    fn wash_row_plain_without_color() {
        let stops = [amber(), orange()];
        assert_eq!(wash_row(4, &stops, ColorProfile::Ascii), "    ");
    }

    #[test]
    fn wash_row_visible_width() {
        let stops = [amber(), orange()];
        let out = wash_row(12, &stops, ColorProfile::TrueColor);
        assert_eq!(visible_width(&out), 12);
    }
}
