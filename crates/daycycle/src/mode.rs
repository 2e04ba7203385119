//! Auto/manual mode state machine and the auto-refresh timer.
//!
//! In auto mode the active segment mirrors the wall clock and a recurring
//! timer re-reads it once a minute. In manual mode the active segment is
//! whatever the user last applied and the timer stays disarmed. Leaving
//! auto retires the armed tick synchronously, so a tick that was already
//! in flight can never land on a manual selection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use mainspring::{every, Cmd, Message};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{current_time_of_day, palette_for, Clock, DomainError, Palette, TimeOfDay};

/// Global ID counter for controller instances.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Period of the auto-refresh timer.
pub const REFRESH_PERIOD: Duration = Duration::from_secs(60);

/// How the active segment is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the wall clock, refreshed once a minute.
    Auto,
    /// Hold the last applied segment.
    Manual,
}

impl ThemeMode {
    /// Lowercase token name, matching the serde form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }

    /// Parse a lowercase token name.
    #[must_use]
    pub fn parse_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::Auto),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Message sent on every auto-refresh tick.
#[derive(Debug, Clone, Copy)]
pub struct RefreshTickMsg {
    /// The controller ID.
    pub id: u64,
    /// Tag for rejecting ticks armed before a mode exit.
    tag: u64,
}

impl RefreshTickMsg {
    /// Creates a refresh tick message.
    #[must_use]
    pub fn new(id: u64, tag: u64) -> Self {
        Self { id, tag }
    }
}

/// Mode state machine owning the refresh timer handle.
#[derive(Debug, Clone)]
pub struct ModeController {
    /// Identity carried by this controller's tick messages.
    id: u64,
    /// Tag carried by the currently armed tick.
    tag: u64,
    /// Current mode.
    mode: ThemeMode,
    /// Active segment. Mirrors the clock in auto, holds the committed
    /// selection in manual.
    active: TimeOfDay,
    /// Refresh period.
    interval: Duration,
}

impl ModeController {
    /// Create a controller in auto mode, seeded from the clock.
    ///
    /// # Errors
    ///
    /// Rejects clocks that report an hour above 23.
    pub fn new(clock: &dyn Clock) -> Result<Self, DomainError> {
        Self::with_interval(clock, REFRESH_PERIOD)
    }

    /// Create a controller with a custom refresh period.
    ///
    /// # Errors
    ///
    /// Rejects clocks that report an hour above 23.
    pub fn with_interval(clock: &dyn Clock, interval: Duration) -> Result<Self, DomainError> {
        Ok(Self {
            id: next_id(),
            tag: 0,
            mode: ThemeMode::Auto,
            active: current_time_of_day(clock)?,
            interval,
        })
    }

    /// Returns the controller's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The active segment driving the theme.
    #[must_use]
    pub fn active(&self) -> TimeOfDay {
        self.active
    }

    /// Palette of the active segment.
    #[must_use]
    pub fn palette(&self) -> Palette {
        palette_for(self.active)
    }

    /// Refresh period.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Command to arm the refresh timer, when in auto mode.
    #[must_use]
    pub fn init(&self) -> Option<Cmd> {
        match self.mode {
            ThemeMode::Auto => Some(self.refresh_cmd()),
            ThemeMode::Manual => None,
        }
    }

    /// Arm one clock-aligned tick carrying the current id and tag.
    fn refresh_cmd(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        every(self.interval, move |_| {
            Message::new(RefreshTickMsg { id, tag })
        })
    }

    /// Flip between auto and manual.
    ///
    /// Entering manual seeds the selection from the current hour and
    /// retires any armed tick. Entering auto discards the manual
    /// selection, recomputes from the clock, and returns the command that
    /// re-arms the timer.
    ///
    /// # Errors
    ///
    /// Rejects clocks that report an hour above 23, leaving the state
    /// unchanged.
    pub fn toggle(&mut self, clock: &dyn Clock) -> Result<Option<Cmd>, DomainError> {
        let segment = current_time_of_day(clock)?;
        match self.mode {
            ThemeMode::Auto => {
                self.active = segment;
                self.mode = ThemeMode::Manual;
                // Retire the armed tick before it can land.
                self.tag = self.tag.wrapping_add(1);
                debug!(segment = %self.active, "switched to manual mode");
                Ok(None)
            }
            ThemeMode::Manual => {
                self.active = segment;
                self.mode = ThemeMode::Auto;
                debug!(segment = %self.active, "switched to auto mode");
                Ok(Some(self.refresh_cmd()))
            }
        }
    }

    /// Commit a manual selection. Ignored outside manual mode.
    pub fn set_manual(&mut self, segment: TimeOfDay) {
        if self.mode != ThemeMode::Manual {
            debug!(segment = %segment, "manual selection ignored in auto mode");
            return;
        }
        self.active = segment;
    }

    /// Handle a refresh tick, re-reading the clock and re-arming.
    ///
    /// Ticks from other controllers, ticks carrying a retired tag, and
    /// ticks arriving in manual mode are all dropped without re-arming.
    pub fn update(&mut self, msg: &Message, clock: &dyn Clock) -> Option<Cmd> {
        let tick = msg.downcast_ref::<RefreshTickMsg>()?;
        if tick.id != 0 && tick.id != self.id {
            return None;
        }
        // Exact tag match. A tick armed before a mode exit carries the
        // old tag and can never slip through.
        if tick.tag != self.tag {
            return None;
        }
        if self.mode != ThemeMode::Auto {
            return None;
        }

        match current_time_of_day(clock) {
            Ok(segment) => {
                if segment != self.active {
                    debug!(from = %self.active, to = %segment, "auto refresh advanced the theme");
                }
                self.active = segment;
            }
            Err(err) => warn!(%err, "auto refresh skipped"),
        }
        self.tag = self.tag.wrapping_add(1);
        Some(self.refresh_cmd())
    }
}
