//! Color values and terminal capability profiles.
//!
//! Colors are carried as hex string tokens (`#rrggbb` or `#rgb`) and decoded
//! to RGB at render time. The [`ColorProfile`] decides how an RGB value is
//! written out: 24-bit escape, 256-color approximation, or nothing at all.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How much color the attached terminal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorProfile {
    /// No color output (plain text).
    Ascii,
    /// 8-bit palette of 256 colors.
    Ansi256,
    /// 24-bit true color.
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Detect the profile from the environment.
    ///
    /// `NO_COLOR` wins over everything; otherwise `COLORTERM` signals
    /// truecolor support, and anything else falls back to 256 colors.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            return Self::Ascii;
        }
        match std::env::var("COLORTERM").as_deref() {
            Ok("truecolor" | "24bit") => Self::TrueColor,
            _ => Self::Ansi256,
        }
    }
}

/// Errors from parsing color strings.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    /// The input was empty or all whitespace.
    #[error("color string is empty")]
    Empty,
    /// The input was not a 3- or 6-digit hex color.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// A hex color token.
///
/// # Examples
///
/// ```rust
/// use tinct::Color;
///
/// let amber = Color::from("#fbbf24");
/// assert_eq!(amber.as_rgb(), Some((0xfb, 0xbf, 0x24)));
///
/// let short = Color::from("#f2c");
/// assert_eq!(short.as_rgb(), Some((0xff, 0x22, 0xcc)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(pub String);

impl Color {
    /// Create a new color from a string without validating it.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse and validate a hex color string, normalizing to lowercase
    /// `#`-prefixed form.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the input is empty or not 3/6 hex digits.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(ColorError::Empty);
        }
        let hex = raw.trim_start_matches('#');
        let well_formed =
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
        if !well_formed {
            return Err(ColorError::InvalidHex(raw.to_string()));
        }
        Ok(Self(format!("#{}", hex.to_ascii_lowercase())))
    }

    /// Decode to RGB if this is a well-formed hex color.
    #[must_use]
    pub fn as_rgb(&self) -> Option<(u8, u8, u8)> {
        let s = self.0.trim().trim_start_matches('#');
        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some((r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some((r, g, b))
        } else {
            None
        }
    }

    /// Foreground escape sequence for the given profile.
    ///
    /// Unparseable colors render as empty so bad tokens degrade to plain
    /// text instead of corrupting the output stream.
    #[must_use]
    pub fn to_ansi_fg(&self, profile: ColorProfile) -> String {
        match (profile, self.as_rgb()) {
            (ColorProfile::Ascii, _) | (_, None) => String::new(),
            (ColorProfile::TrueColor, Some((r, g, b))) => format!("\x1b[38;2;{r};{g};{b}m"),
            (ColorProfile::Ansi256, Some((r, g, b))) => {
                format!("\x1b[38;5;{}m", rgb_to_ansi256(r, g, b))
            }
        }
    }

    /// Background escape sequence for the given profile.
    #[must_use]
    pub fn to_ansi_bg(&self, profile: ColorProfile) -> String {
        match (profile, self.as_rgb()) {
            (ColorProfile::Ascii, _) | (_, None) => String::new(),
            (ColorProfile::TrueColor, Some((r, g, b))) => format!("\x1b[48;2;{r};{g};{b}m"),
            (ColorProfile::Ansi256, Some((r, g, b))) => {
                format!("\x1b[48;5;{}m", rgb_to_ansi256(r, g, b))
            }
        }
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ColorVisitor)
    }
}

struct ColorVisitor;

impl Visitor<'_> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a hex color string like '#fbbf24'")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Color::parse(v).map_err(E::custom)
    }
}

/// Convert RGB to the nearest ANSI 256 palette index.
#[must_use]
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // Grayscale ramp for near-equal channels
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return ((f64::from(r) - 8.0) / 247.0 * 24.0).round() as u8 + 232;
    }

    // Non-gray values land in the 6x6x6 cube starting at index 16.
    let r_idx = (f64::from(r) / 255.0 * 5.0).round() as u8;
    let g_idx = (f64::from(g) / 255.0 * 5.0).round() as u8;
    let b_idx = (f64::from(b) / 255.0 * 5.0).round() as u8;

    16 + 36 * r_idx + 6 * g_idx + b_idx
}

/// Linear interpolation between two RGB triples at `t` in [0,1].
#[must_use]
pub fn blend(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let channel = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    (channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}
