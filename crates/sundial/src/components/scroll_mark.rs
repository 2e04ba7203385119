//! Scroll progress strip shown above the content area.

use daycycle::Palette;
use tinct::gradient::gradient_bar;
use tinct::{Color, ColorProfile, Style};

/// Fraction of the scrollable range consumed, in `0.0..=1.0`.
///
/// A view that cannot scroll reports `0.0`.
#[must_use]
pub fn progress(offset: usize, max: usize) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (offset.min(max) as f64) / (max as f64)
}

/// One-row progress strip: gradient fill over a faint track.
#[must_use]
pub fn render(
    offset: usize,
    max: usize,
    width: usize,
    palette: &Palette,
    profile: ColorProfile,
) -> String {
    let filled = ((progress(offset, max) * width as f64).round() as usize).min(width);
    let fill = gradient_bar(
        filled,
        '█',
        &Color::from(palette.primary.start),
        &Color::from(palette.primary.end),
        profile,
    );
    let track = Style::new()
        .profile(profile)
        .faint()
        .render(&"░".repeat(width - filled));
    format!("{fill}{track}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycycle::{palette_for, TimeOfDay};
    use tinct::{strip_ansi, visible_width};

    #[test]
    fn unscrollable_view_reports_zero() {
        assert_eq!(progress(0, 0), 0.0);
        assert_eq!(progress(7, 0), 0.0);
    }

    #[test]
    fn progress_is_proportional_and_clamped() {
        assert_eq!(progress(5, 10), 0.5);
        assert_eq!(progress(10, 10), 1.0);
        assert_eq!(progress(25, 10), 1.0);
    }

    #[test]
    fn render_spans_the_full_width() {
        let palette = palette_for(TimeOfDay::Morning);
        for offset in [0, 3, 10] {
            let strip = render(offset, 10, 24, &palette, ColorProfile::TrueColor);
            assert_eq!(visible_width(&strip), 24);
        }
    }

    #[test]
    fn render_fill_tracks_offset() {
        let palette = palette_for(TimeOfDay::Night);
        let halfway = render(5, 10, 20, &palette, ColorProfile::Ascii);
        let plain = strip_ansi(&halfway);
        assert_eq!(plain.matches('█').count(), 10);
        assert_eq!(plain.matches('░').count(), 10);
    }
}
