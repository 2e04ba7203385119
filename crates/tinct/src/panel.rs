//! Bordered panel rendering.

use crate::measure::{pad_to, visible_width};
use crate::style::Style;

/// Border character set for panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Border {
    /// Standard square-corner border.
    ///
    /// ```text
    /// ┌───┐
    /// │   │
    /// └───┘
    /// ```
    #[must_use]
    pub const fn normal() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        }
    }

    /// Rounded-corner border.
    ///
    /// ```text
    /// ╭───╮
    /// │   │
    /// ╰───╯
    /// ```
    #[must_use]
    pub const fn rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '─',
            vertical: '│',
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::rounded()
    }
}

/// Wrap `content` in a border with the given inner width.
///
/// Lines wider than `inner_width` extend the panel; the widest line wins.
/// `border_style` colors the frame only, content passes through untouched.
#[must_use]
pub fn panel(content: &str, inner_width: usize, border: Border, border_style: &Style) -> String {
    panel_inner(None, content, inner_width, border, border_style)
}

/// Like [`panel`], with a title embedded in the top edge.
#[must_use]
pub fn titled_panel(
    title: &str,
    content: &str,
    inner_width: usize,
    border: Border,
    border_style: &Style,
) -> String {
    panel_inner(Some(title), content, inner_width, border, border_style)
}

fn panel_inner(
    title: Option<&str>,
    content: &str,
    inner_width: usize,
    border: Border,
    border_style: &Style,
) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let width = lines
        .iter()
        .map(|l| visible_width(l))
        .max()
        .unwrap_or(0)
        .max(inner_width);

    let hbar = |n: usize| border.horizontal.to_string().repeat(n);

    let top = match title {
        Some(t) if !t.is_empty() => {
            // ╭─ Title ─────╮ with the tail absorbing leftover width
            let label = format!(" {t} ");
            let tail = (width + 1).saturating_sub(visible_width(&label));
            border_style.render(&format!(
                "{}{}{label}{}{}",
                border.top_left,
                hbar(1),
                hbar(tail),
                border.top_right
            ))
        }
        _ => border_style.render(&format!(
            "{}{}{}",
            border.top_left,
            hbar(width + 2),
            border.top_right
        )),
    };

    let bottom = border_style.render(&format!(
        "{}{}{}",
        border.bottom_left,
        hbar(width + 2),
        border.bottom_right
    ));

    let side = border_style.render(&border.vertical.to_string());
    let mut out = String::new();
    out.push_str(&top);
    out.push('\n');
    for line in &lines {
        out.push_str(&side);
        out.push(' ');
        out.push_str(&pad_to(line, width));
        out.push(' ');
        out.push_str(&side);
        out.push('\n');
    }
    if lines.is_empty() {
        out.push_str(&side);
        out.push(' ');
        out.push_str(&" ".repeat(width));
        out.push(' ');
        out.push_str(&side);
        out.push('\n');
    }
    out.push_str(&bottom);
    out
}
