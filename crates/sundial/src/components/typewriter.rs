//! Character-by-character text reveal driven by timer messages.
//!
//! Each [`Typewriter`] owns an id so concurrent instances do not consume
//! each other's ticks, and a tag that retires in-flight ticks whenever the
//! reveal is skipped or re-armed. Stale ticks are dropped without effect.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use daycycle::Palette;
use mainspring::{tick, Cmd, Message};
use tinct::{ColorProfile, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Timer message advancing a typewriter by one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeTickMsg {
    id: u64,
    tag: u64,
}

impl TypeTickMsg {
    #[must_use]
    pub fn new(id: u64, tag: u64) -> Self {
        Self { id, tag }
    }
}

/// Progressive text reveal with a lead-in delay and per-glyph cadence.
#[derive(Debug, Clone)]
pub struct Typewriter {
    full: String,
    shown: usize,
    id: u64,
    tag: u64,
    speed: Duration,
    delay: Duration,
}

impl Typewriter {
    /// A typewriter for `text`, hidden until armed.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            full: text.into(),
            shown: 0,
            id: next_id(),
            tag: 0,
            speed: Duration::from_millis(50),
            delay: Duration::ZERO,
        }
    }

    /// Gap between revealed glyphs.
    #[must_use]
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Extra wait before the first glyph appears.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Instance id, carried by this typewriter's ticks.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the full text is visible.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.shown >= self.full.chars().count()
    }

    /// The currently revealed prefix.
    #[must_use]
    pub fn visible(&self) -> String {
        self.full.chars().take(self.shown).collect()
    }

    /// Command to start (or continue) the reveal.
    #[must_use]
    pub fn arm(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        // The lead-in delay applies before the first glyph only.
        let wait = if self.shown == 0 {
            self.delay + self.speed
        } else {
            self.speed
        };
        tick(wait, move |_| Message::new(TypeTickMsg { id, tag }))
    }

    /// Advance on a matching tick, re-arming until the text is complete.
    pub fn update(&mut self, msg: &Message) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TypeTickMsg>()?;
        if tick_msg.id != self.id || tick_msg.tag != self.tag {
            return None;
        }
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        if self.is_done() {
            None
        } else {
            Some(self.arm())
        }
    }

    /// Reveal everything at once and retire any in-flight tick.
    pub fn skip(&mut self) {
        self.shown = self.full.chars().count();
        self.tag = self.tag.wrapping_add(1);
    }

    /// Re-arm after an interruption, retiring any tick still in flight.
    ///
    /// Returns `None` when the reveal already finished.
    pub fn resume(&mut self) -> Option<Cmd> {
        self.tag = self.tag.wrapping_add(1);
        if self.is_done() {
            None
        } else {
            Some(self.arm())
        }
    }

    /// The revealed prefix plus a cursor while glyphs are still pending.
    #[must_use]
    pub fn view(&self, palette: &Palette, profile: ColorProfile) -> String {
        let text = Style::new()
            .profile(profile)
            .foreground(palette.text_secondary)
            .render(&self.visible());
        if self.is_done() {
            text
        } else {
            let cursor = Style::new()
                .profile(profile)
                .foreground(palette.accent.start)
                .bold()
                .render("|");
            format!("{text}{cursor}")
        }
    }
}
