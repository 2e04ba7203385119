use proptest::prelude::*;
use tinct::gradient::{gradient_bar, gradient_text, sample, wash_row};
use tinct::{
    blend, pad_to, panel, rgb_to_ansi256, strip_ansi, truncate_plain, visible_width, Border, Color,
    ColorProfile, Style,
};

// =============================================================================
// Measurement
// =============================================================================

proptest! {
    #[test]
    fn strip_ansi_never_panics(s in "\\PC{0,200}") {
        let _ = strip_ansi(&s);
    }

    #[test]
    fn strip_ansi_is_identity_on_plain_ascii(s in "[a-zA-Z0-9 ]{0,100}") {
        prop_assert_eq!(strip_ansi(&s), s);
    }

    #[test]
    fn visible_width_ascii_equals_len(s in "[a-zA-Z0-9 ]{0,100}") {
        prop_assert_eq!(visible_width(&s), s.len());
    }

    #[test]
    fn visible_width_ignores_sgr(text in "[a-z]{1,20}", code in 0u8..108) {
        let styled = format!("\x1b[{code}m{text}\x1b[0m");
        prop_assert_eq!(visible_width(&styled), text.len());
    }

    #[test]
    fn visible_width_doubles_cjk(count in 1usize..20) {
        let cjk: String = std::iter::repeat_n('中', count).collect();
        prop_assert_eq!(visible_width(&cjk), count * 2);
    }
}

// =============================================================================
// Padding and truncation
// =============================================================================

proptest! {
    #[test]
    fn pad_to_reaches_the_target(s in "[a-z]{0,30}", width in 0usize..60) {
        let padded = pad_to(&s, width);
        prop_assert!(visible_width(&padded) >= width);
        prop_assert!(padded.starts_with(&s));
    }

    #[test]
    fn pad_to_is_exact_for_short_ascii(s in "[a-z]{0,10}", extra in 0usize..20) {
        let width = s.len() + extra;
        prop_assert_eq!(visible_width(&pad_to(&s, width)), width);
    }

    #[test]
    fn truncate_plain_never_exceeds_width(s in "\\PC{0,60}", width in 0usize..40) {
        prop_assert!(visible_width(&truncate_plain(&s, width)) <= width);
    }

    #[test]
    fn truncate_plain_keeps_fitting_text(s in "[a-z]{0,20}") {
        prop_assert_eq!(truncate_plain(&s, 30), s);
    }
}

// =============================================================================
// Color math
// =============================================================================

proptest! {
    #[test]
    fn blend_endpoints_are_exact(a in any::<(u8, u8, u8)>(), b in any::<(u8, u8, u8)>()) {
        prop_assert_eq!(blend(a, b, 0.0), a);
        prop_assert_eq!(blend(a, b, 1.0), b);
    }

    #[test]
    fn blend_stays_between_the_endpoints(
        a in any::<(u8, u8, u8)>(),
        b in any::<(u8, u8, u8)>(),
        t in 0.0f64..=1.0,
    ) {
        let (r, g, bl) = blend(a, b, t);
        prop_assert!(r >= a.0.min(b.0) && r <= a.0.max(b.0));
        prop_assert!(g >= a.1.min(b.1) && g <= a.1.max(b.1));
        prop_assert!(bl >= a.2.min(b.2) && bl <= a.2.max(b.2));
    }

    #[test]
    fn blend_clamps_t(a in any::<(u8, u8, u8)>(), b in any::<(u8, u8, u8)>(), t in -10.0f64..20.0) {
        prop_assert_eq!(blend(a, b, t), blend(a, b, t.clamp(0.0, 1.0)));
    }

    #[test]
    fn ansi256_index_is_in_the_palette(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        prop_assert!(rgb_to_ansi256(r, g, b) >= 16);
    }

    #[test]
    fn ansi256_grayscale_uses_the_ramp(v in 8u8..=248) {
        prop_assert!((232..=255).contains(&rgb_to_ansi256(v, v, v)));
    }
}

// =============================================================================
// Gradients
// =============================================================================

proptest! {
    #[test]
    fn gradient_text_preserves_visible_width(text in "[a-zA-Z0-9 ]{0,40}") {
        let out = gradient_text(
            &text,
            &Color::from("#fbbf24"),
            &Color::from("#f97316"),
            ColorProfile::TrueColor,
        );
        prop_assert_eq!(visible_width(&out), text.len());
    }

    #[test]
    fn gradient_text_is_plain_on_ascii(text in "[a-z ]{0,40}") {
        let out = gradient_text(
            &text,
            &Color::from("#fbbf24"),
            &Color::from("#f97316"),
            ColorProfile::Ascii,
        );
        prop_assert_eq!(out, text);
    }

    #[test]
    fn gradient_bar_width_matches(width in 0usize..80) {
        let out = gradient_bar(
            width,
            '█',
            &Color::from("#fbbf24"),
            &Color::from("#f97316"),
            ColorProfile::TrueColor,
        );
        prop_assert_eq!(visible_width(&out), width);
    }

    #[test]
    fn wash_row_width_matches(width in 0usize..80) {
        let stops = [
            Color::from("#0f172a"),
            Color::from("#1e293b"),
            Color::from("#334155"),
        ];
        let out = wash_row(width, &stops, ColorProfile::TrueColor);
        prop_assert_eq!(visible_width(&out), width);
    }

    #[test]
    fn sample_is_total_over_parseable_stops(t in -2.0f64..3.0) {
        let stops = [Color::from("#000000"), Color::from("#ffffff")];
        prop_assert!(sample(&stops, t).is_some());
    }

    #[test]
    fn sample_clamps_t_high(t in 1.0f64..10.0) {
        let stops = [Color::from("#000000"), Color::from("#ffffff")];
        prop_assert_eq!(sample(&stops, t), Some((255, 255, 255)));
    }
}

// =============================================================================
// Styles and panels
// =============================================================================

proptest! {
    #[test]
    fn styled_text_keeps_its_visible_width(text in "[a-zA-Z0-9 ]{0,40}") {
        let style = Style::new()
            .profile(ColorProfile::TrueColor)
            .foreground("#fbbf24")
            .bold();
        prop_assert_eq!(visible_width(&style.render(&text)), text.len());
    }

    #[test]
    fn empty_style_is_identity(text in "[a-z ]{0,40}") {
        prop_assert_eq!(Style::new().render(&text), text);
    }

    #[test]
    fn panel_lines_share_one_width(
        lines in prop::collection::vec("[a-z ]{0,20}", 0..5),
        inner in 0usize..40,
    ) {
        let content = lines.join("\n");
        let out = panel(&content, inner, Border::rounded(), &Style::new());

        let widest = content.lines().map(visible_width).max().unwrap_or(0);
        let expected = widest.max(inner) + 4;
        for line in out.lines() {
            prop_assert_eq!(visible_width(line), expected);
        }
    }
}
