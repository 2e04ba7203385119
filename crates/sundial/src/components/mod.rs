//! Reusable render helpers and animated components for `sundial`.
//!
//! The helpers here are the shared design language of the sections:
//! gradient headings, proficiency bars, tech chips, key hints, and a word
//! wrapper for body copy. Everything renders from [`Palette`] tokens so the
//! whole app reskins when the time of day changes.

pub mod drift;
pub mod scroll_mark;
pub mod typewriter;

pub use drift::DriftField;
pub use typewriter::Typewriter;

use daycycle::Palette;
use tinct::gradient::{gradient_bar, gradient_text};
use tinct::{visible_width, Color, ColorProfile, Style};

/// A section heading: gradient title over a matching underline.
#[must_use]
pub fn section_heading(title: &str, palette: &Palette, profile: ColorProfile) -> String {
    let start = Color::from(palette.primary.start);
    let end = Color::from(palette.primary.end);
    let text = gradient_text(title, &start, &end, profile);
    let rule = gradient_bar(visible_width(title), '─', &start, &end, profile);
    format!("{text}\n{rule}")
}

/// A proficiency bar: gradient fill over a faint track, with the level.
#[must_use]
pub fn level_bar(level: u8, width: usize, palette: &Palette, profile: ColorProfile) -> String {
    let clamped = usize::from(level.min(100));
    let filled = (clamped * width) / 100;
    let rest = width.saturating_sub(filled);

    let fill = gradient_bar(
        filled,
        '█',
        &Color::from(palette.secondary.start),
        &Color::from(palette.secondary.end),
        profile,
    );
    let track = Style::new()
        .profile(profile)
        .faint()
        .render(&"░".repeat(rest));

    format!("{fill}{track} {clamped:>3}%")
}

/// A bracketed technology tag in the accent color.
#[must_use]
pub fn tech_chip(label: &str, palette: &Palette, profile: ColorProfile) -> String {
    Style::new()
        .profile(profile)
        .foreground(palette.accent.start)
        .render(&format!("[{label}]"))
}

/// Key hints for the footer: bold key, faint action, double-spaced pairs.
#[must_use]
pub fn key_hints(hints: &[(&str, &str)], profile: ColorProfile) -> String {
    hints
        .iter()
        .map(|(key, action)| {
            let key_styled = Style::new().profile(profile).bold().render(key);
            let action_styled = Style::new().profile(profile).faint().render(action);
            format!("{key_styled} {action_styled}")
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Greedy word wrap to `width` columns.
///
/// Words longer than the width get a line of their own rather than being
/// split mid-word.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycycle::palette_for;
    use daycycle::TimeOfDay;
    use tinct::strip_ansi;

    #[test]
    fn heading_has_title_and_rule() {
        let palette = palette_for(TimeOfDay::Morning);
        let heading = section_heading("Skills", &palette, ColorProfile::TrueColor);
        let plain = strip_ansi(&heading);
        let mut lines = plain.lines();
        assert_eq!(lines.next(), Some("Skills"));
        assert_eq!(lines.next().map(str::len), Some("Skills".len()));
    }

    #[test]
    fn level_bar_fills_proportionally() {
        let palette = palette_for(TimeOfDay::Night);
        let bar = level_bar(50, 20, &palette, ColorProfile::TrueColor);
        let plain = strip_ansi(&bar);
        assert_eq!(plain.matches('█').count(), 10);
        assert_eq!(plain.matches('░').count(), 10);
        assert!(plain.ends_with("50%"));
    }

    #[test]
    fn level_bar_clamps_over_one_hundred() {
        let palette = palette_for(TimeOfDay::Evening);
        let bar = level_bar(250, 10, &palette, ColorProfile::Ascii);
        assert!(bar.ends_with("100%"));
    }

    #[test]
    fn tech_chip_brackets_label() {
        let palette = palette_for(TimeOfDay::Afternoon);
        let chip = tech_chip("Rust", &palette, ColorProfile::Ascii);
        assert_eq!(strip_ansi(&chip), "[Rust]");
    }

    #[test]
    fn key_hints_pairs_key_and_action() {
        let hints = key_hints(&[("t", "toggle mode"), ("q", "quit")], ColorProfile::Ascii);
        let plain = strip_ansi(&hints);
        assert!(plain.contains("t toggle mode"));
        assert!(plain.contains("q quit"));
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_gives_long_words_their_own_line() {
        let lines = wrap("a extraordinarily b", 8);
        assert!(lines.contains(&"extraordinarily".to_string()));
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap("", 40).is_empty());
    }
}
