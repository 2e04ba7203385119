//! Chainable SGR text styles.

use crate::color::{Color, ColorProfile};

/// A chainable text style: attributes plus optional fore/background colors.
///
/// Styles are cheap to clone and apply line by line, resetting at the end
/// of every line so partial output never bleeds.
///
/// # Example
///
/// ```rust
/// use tinct::Style;
///
/// let heading = Style::new().bold().foreground("#fbbf24");
/// let out = heading.render("Skills");
/// assert!(out.starts_with("\x1b[1m"));
/// assert!(out.ends_with("\x1b[0m"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    faint: bool,
    italic: bool,
    underline: bool,
    reverse: bool,
    profile: ColorProfile,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color profile used when rendering.
    #[must_use]
    pub fn profile(mut self, profile: ColorProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the foreground color.
    #[must_use]
    pub fn foreground(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(color.into());
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Enable bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enable faint.
    #[must_use]
    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }

    /// Enable italic.
    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Enable underline.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Enable reverse video.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Render the given text with this style applied per line.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let seq = self.escape_sequence();
        if seq.is_empty() {
            return text.to_string();
        }
        text.lines()
            .map(|line| format!("{seq}{line}\x1b[0m"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The opening escape sequence for this style, without any reset.
    #[must_use]
    pub fn escape_sequence(&self) -> String {
        let mut seq = String::new();
        if self.bold {
            seq.push_str("\x1b[1m");
        }
        if self.faint {
            seq.push_str("\x1b[2m");
        }
        if self.italic {
            seq.push_str("\x1b[3m");
        }
        if self.underline {
            seq.push_str("\x1b[4m");
        }
        if self.reverse {
            seq.push_str("\x1b[7m");
        }
        if let Some(ref fg) = self.fg {
            seq.push_str(&fg.to_ansi_fg(self.profile));
        }
        if let Some(ref bg) = self.bg {
            seq.push_str(&bg.to_ansi_bg(self.profile));
        }
        seq
    }
}
