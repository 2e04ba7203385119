#![forbid(unsafe_code)]

//! Terminal styling: hex color tokens, SGR styles, gradients, and panels.
//!
//! `tinct` is the rendering vocabulary for the workspace. Palettes hand it
//! opaque hex tokens; it turns them into escape sequences appropriate for
//! the active [`ColorProfile`].
//!
//! # Example
//!
//! ```rust
//! use tinct::{Color, ColorProfile, Style, gradient};
//!
//! let heading = Style::new().bold().foreground("#fbbf24").render("Hello");
//! assert!(heading.contains("38;2;251;191;36"));
//!
//! let faded = gradient::gradient_text(
//!     "sunrise",
//!     &Color::from("#fbbf24"),
//!     &Color::from("#f97316"),
//!     ColorProfile::TrueColor,
//! );
//! assert!(faded.contains("\x1b[38;2;"));
//! ```

pub mod color;
pub mod gradient;
pub mod measure;
pub mod panel;
pub mod style;

pub use color::{blend, rgb_to_ansi256, Color, ColorError, ColorProfile};
pub use measure::{pad_to, strip_ansi, truncate_plain, visible_width};
pub use panel::{panel, titled_panel, Border};
pub use style::Style;
