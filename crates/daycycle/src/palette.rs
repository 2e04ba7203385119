//! Fixed palettes, one per day segment.
//!
//! Seven roles cover everything the UI paints: three gradient pairs for
//! emphasis, a three-stop background wash, a card fill, and two text
//! tones. The tables are const and total; there is no segment without a
//! palette and no role without a color.

use crate::TimeOfDay;

/// A two-stop gradient for headings, accents, and slider tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPair {
    pub start: &'static str,
    pub end: &'static str,
}

/// A three-stop wash for full-width backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wash {
    pub start: &'static str,
    pub mid: &'static str,
    pub end: &'static str,
}

/// The complete color assignment for one day segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Main emphasis gradient for headings and the hero name.
    pub primary: GradientPair,
    /// Softer companion gradient for subheadings.
    pub secondary: GradientPair,
    /// High-contrast gradient for highlights and calls to action.
    pub accent: GradientPair,
    /// Page background wash.
    pub background: Wash,
    /// Card and panel fill.
    pub card_background: &'static str,
    /// Body text.
    pub text_primary: &'static str,
    /// De-emphasized text.
    pub text_secondary: &'static str,
}

impl Palette {
    /// Warm ambers and oranges.
    #[must_use]
    pub const fn morning() -> Self {
        Self {
            primary: GradientPair {
                start: "#fbbf24",
                end: "#f97316",
            },
            secondary: GradientPair {
                start: "#fde047",
                end: "#fbbf24",
            },
            accent: GradientPair {
                start: "#fb923c",
                end: "#f87171",
            },
            background: Wash {
                start: "#fffbeb",
                mid: "#fff7ed",
                end: "#fef9c3",
            },
            card_background: "#fffbeb",
            text_primary: "#78350f",
            text_secondary: "#b45309",
        }
    }

    /// Clear blues and cyans.
    #[must_use]
    pub const fn afternoon() -> Self {
        Self {
            primary: GradientPair {
                start: "#60a5fa",
                end: "#06b6d4",
            },
            secondary: GradientPair {
                start: "#7dd3fc",
                end: "#60a5fa",
            },
            accent: GradientPair {
                start: "#22d3ee",
                end: "#2dd4bf",
            },
            background: Wash {
                start: "#f0f9ff",
                mid: "#eff6ff",
                end: "#cffafe",
            },
            card_background: "#f0f9ff",
            text_primary: "#0c4a6e",
            text_secondary: "#0369a1",
        }
    }

    /// Purples fading into pink and rose.
    #[must_use]
    pub const fn evening() -> Self {
        Self {
            primary: GradientPair {
                start: "#c084fc",
                end: "#ec4899",
            },
            secondary: GradientPair {
                start: "#c4b5fd",
                end: "#c084fc",
            },
            accent: GradientPair {
                start: "#f472b6",
                end: "#fb7185",
            },
            background: Wash {
                start: "#faf5ff",
                mid: "#fdf2f8",
                end: "#ffe4e6",
            },
            card_background: "#faf5ff",
            text_primary: "#581c87",
            text_secondary: "#7e22ce",
        }
    }

    /// Saturated sky blues over a pale wash. Night keeps a light
    /// background on purpose; only the hue shifts, not the brightness.
    #[must_use]
    pub const fn night() -> Self {
        Self {
            primary: GradientPair {
                start: "#0ea5e9",
                end: "#2563eb",
            },
            secondary: GradientPair {
                start: "#38bdf8",
                end: "#3b82f6",
            },
            accent: GradientPair {
                start: "#60a5fa",
                end: "#6366f1",
            },
            background: Wash {
                start: "#bae6fd",
                mid: "#7dd3fc",
                end: "#bfdbfe",
            },
            card_background: "#e0f2fe",
            text_primary: "#1e293b",
            text_secondary: "#475569",
        }
    }
}

/// Look up the palette for a day segment.
#[must_use]
pub const fn palette_for(segment: TimeOfDay) -> Palette {
    match segment {
        TimeOfDay::Morning => Palette::morning(),
        TimeOfDay::Afternoon => Palette::afternoon(),
        TimeOfDay::Evening => Palette::evening(),
        TimeOfDay::Night => Palette::night(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_segment_has_a_distinct_palette() {
        let palettes: Vec<Palette> = TimeOfDay::ALL.into_iter().map(palette_for).collect();
        for (i, a) in palettes.iter().enumerate() {
            for b in &palettes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn all_colors_are_hex_encoded() {
        for segment in TimeOfDay::ALL {
            let p = palette_for(segment);
            let colors = [
                p.primary.start,
                p.primary.end,
                p.secondary.start,
                p.secondary.end,
                p.accent.start,
                p.accent.end,
                p.background.start,
                p.background.mid,
                p.background.end,
                p.card_background,
                p.text_primary,
                p.text_secondary,
            ];
            for color in colors {
                assert!(color.starts_with('#'), "{segment}: {color}");
                assert_eq!(color.len(), 7, "{segment}: {color}");
                assert!(
                    color[1..].chars().all(|c| c.is_ascii_hexdigit()),
                    "{segment}: {color}"
                );
            }
        }
    }

    #[test]
    fn morning_is_amber() {
        let p = palette_for(TimeOfDay::Morning);
        assert_eq!(p.primary.start, "#fbbf24");
        assert_eq!(p.primary.end, "#f97316");
        assert_eq!(p.text_primary, "#78350f");
    }

    #[test]
    fn night_stays_light() {
        // The night wash is a pale blue, not a dark slate. Verify the
        // background channels stay high so a regression to a dark theme
        // is caught here.
        let p = palette_for(TimeOfDay::Night);
        for stop in [p.background.start, p.background.mid, p.background.end] {
            let r = u8::from_str_radix(&stop[1..3], 16).unwrap();
            let g = u8::from_str_radix(&stop[3..5], 16).unwrap();
            let b = u8::from_str_radix(&stop[5..7], 16).unwrap();
            let lum = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
            assert!(lum > 150.0, "night stop {stop} too dark (lum {lum:.0})");
        }
        assert_eq!(p.text_primary, "#1e293b");
    }

    #[test]
    fn lookup_is_stable() {
        assert_eq!(palette_for(TimeOfDay::Evening), Palette::evening());
        assert_eq!(
            palette_for(TimeOfDay::Evening),
            palette_for(TimeOfDay::Evening)
        );
    }
}
