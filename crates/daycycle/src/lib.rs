#![forbid(unsafe_code)]

//! # Daycycle
//!
//! Time-of-day theming core: the hour and slider partitions, fixed
//! palettes, and the two stateful widgets that manage theme selection.
//!
//! The day splits into four segments. [`TimeOfDay::from_hour`] maps a
//! wall-clock hour onto them and [`palette_for`] assigns each its fixed
//! [`Palette`]. [`ThemeSlider`] holds a previewed selection that becomes
//! authoritative only on apply, and [`ModeController`] decides whether the
//! active theme follows the clock (refreshed once a minute) or the last
//! applied selection.
//!
//! ## Example
//!
//! ```rust
//! use daycycle::{FixedClock, ModeController, ThemeSlider, TimeOfDay};
//!
//! let clock = FixedClock(9);
//! let ctl = ModeController::new(&clock)?;
//! assert_eq!(ctl.active(), TimeOfDay::Morning);
//!
//! let mut slider = ThemeSlider::new(ctl.active());
//! slider.drag(80.0)?;
//! assert_eq!(slider.preview(), TimeOfDay::Night);
//! assert!(slider.has_pending_change());
//! # Ok::<(), daycycle::DomainError>(())
//! ```

pub mod clock;
pub mod mode;
pub mod palette;
pub mod slider;
pub mod time_of_day;

pub use clock::{current_palette, current_time_of_day, Clock, FixedClock, SystemClock};
pub use mode::{ModeController, RefreshTickMsg, ThemeMode, REFRESH_PERIOD};
pub use palette::{palette_for, GradientPair, Palette, Wash};
pub use slider::{ThemeAppliedMsg, ThemeSlider};
pub use time_of_day::{DomainError, TimeOfDay};
