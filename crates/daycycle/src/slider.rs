//! Theme slider widget with preview and apply.
//!
//! The slider reconciles three views of "selected segment": a continuous
//! track position in 0-100, the discrete preview segment derived from it,
//! and the committed segment that actually drives the theme. Dragging and
//! quick-selecting only move the preview; nothing reaches the committed
//! selection until an explicit apply.

use std::sync::atomic::{AtomicU64, Ordering};

use mainspring::{Cmd, Message};
use tinct::{gradient, Color, ColorProfile};
use tracing::debug;

use crate::{palette_for, DomainError, TimeOfDay};

/// Global ID counter for slider instances.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Notification that the user applied a previewed segment.
///
/// Sent by [`ThemeSlider::apply`]; the owner routes it to its mode
/// controller and re-syncs the slider.
#[derive(Debug, Clone, Copy)]
pub struct ThemeAppliedMsg {
    /// The slider ID.
    pub id: u64,
    /// The newly committed segment.
    pub time_of_day: TimeOfDay,
}

/// Slider state: committed segment, preview segment, and track position.
#[derive(Debug, Clone)]
pub struct ThemeSlider {
    /// Identity carried by this widget's messages.
    id: u64,
    /// The externally committed segment this widget mirrors.
    committed: TimeOfDay,
    /// The segment currently previewed.
    preview: TimeOfDay,
    /// Track position in 0-100. Holds the raw drag value; snaps to the
    /// segment midpoint on quick select and re-sync.
    position: f64,
}

impl ThemeSlider {
    /// Create a slider mirroring the given committed segment.
    #[must_use]
    pub fn new(committed: TimeOfDay) -> Self {
        Self {
            id: next_id(),
            committed,
            preview: committed,
            position: committed.slider_midpoint(),
        }
    }

    /// Returns the slider's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The committed segment this widget mirrors.
    #[must_use]
    pub fn committed(&self) -> TimeOfDay {
        self.committed
    }

    /// The segment currently previewed.
    #[must_use]
    pub fn preview(&self) -> TimeOfDay {
        self.preview
    }

    /// Track position in 0-100.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Whether the preview differs from the committed segment.
    ///
    /// Recomputed on every call; the comparison is the single source of
    /// truth, so it can never drift from the two fields it reads.
    #[must_use]
    pub fn has_pending_change(&self) -> bool {
        self.preview != self.committed
    }

    /// Move the thumb to `position` and recompute the preview.
    ///
    /// Touches nothing but the preview pair, and may fire on every
    /// pointer-move tick.
    ///
    /// # Errors
    ///
    /// Rejects non-finite positions and positions outside [0,100],
    /// leaving the state unchanged.
    pub fn drag(&mut self, position: f64) -> Result<(), DomainError> {
        let preview = TimeOfDay::from_slider(position)?;
        self.position = position;
        self.preview = preview;
        Ok(())
    }

    /// Move the thumb by `delta`, clamping at the track ends.
    ///
    /// Keyboard counterpart of a drag. The clamp keeps repeated
    /// keypresses pinned at 0 or 100 rather than erroring.
    pub fn nudge(&mut self, delta: f64) {
        let target = (self.position + delta).clamp(0.0, 100.0);
        // In range by construction, so this cannot fail.
        let _ = self.drag(target);
    }

    /// Preview a segment directly, snapping the thumb to its midpoint.
    ///
    /// Equivalent to dragging to the segment's quarter center.
    pub fn quick_select(&mut self, segment: TimeOfDay) {
        self.preview = segment;
        self.position = segment.slider_midpoint();
    }

    /// Commit the preview and notify the owner.
    ///
    /// With no pending change this is a silent no-op: no state change,
    /// no message, `None` returned. Otherwise the committed mirror takes
    /// the preview value and the returned command delivers a
    /// [`ThemeAppliedMsg`] for the owner to act on.
    pub fn apply(&mut self) -> Option<Cmd> {
        if !self.has_pending_change() {
            return None;
        }
        self.committed = self.preview;
        let id = self.id;
        let time_of_day = self.committed;
        debug!(segment = %time_of_day, "theme applied");
        Some(Cmd::new(move || Message::new(ThemeAppliedMsg { id, time_of_day })))
    }

    /// Reset to a committed segment that changed outside this widget.
    ///
    /// Discards any unapplied preview and snaps the thumb to the new
    /// segment's midpoint.
    pub fn sync_committed(&mut self, segment: TimeOfDay) {
        self.committed = segment;
        self.preview = segment;
        self.position = segment.slider_midpoint();
    }

    /// Render the track as a single line, `width` cells wide.
    ///
    /// The filled portion fades across the preview palette's primary
    /// pair; the rest is an empty track.
    #[must_use]
    pub fn view(&self, width: usize, profile: ColorProfile) -> String {
        if width == 0 {
            return String::new();
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = (((self.position / 100.0) * width as f64).round() as usize).min(width);
        let pair = palette_for(self.preview).primary;
        let bar = gradient::gradient_bar(
            filled,
            '█',
            &Color::from(pair.start),
            &Color::from(pair.end),
            profile,
        );
        let empty = "░".repeat(width - filled);
        format!("{bar}{empty}")
    }
}
