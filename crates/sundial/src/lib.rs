#![forbid(unsafe_code)]

//! # Sundial
//!
//! A terminal portfolio whose palette follows the sun: warm ambers in
//! the morning, sky blues in the afternoon, dusk purples in the evening,
//! and deep indigos at night.
//!
//! The theming itself (segment partitions, palettes, slider, and mode
//! controller) lives in the `daycycle` crate; this crate is the TUI
//! around it: section models, app chrome, configuration, and the CLI.
//!
//! ## Example
//!
//! ```rust
//! use daycycle::FixedClock;
//! use sundial::app::App;
//! use sundial::config::Config;
//!
//! // An app pinned to a 9am clock starts with the morning palette.
//! let app = App::with_clock(Config::default(), Box::new(FixedClock(9)))?;
//! assert_eq!(app.active_segment(), daycycle::TimeOfDay::Morning);
//! # Ok::<(), daycycle::DomainError>(())
//! ```

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod content;
pub mod sections;
