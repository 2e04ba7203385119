//! Ambient drifting glyphs for the hero backdrop.
//!
//! A small fixed set of particles slides across a band of rows, each at
//! its own pace. Positions are pure functions of the frame counter, so a
//! given frame always renders the same picture. The field is disabled
//! entirely when animations are off.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use daycycle::Palette;
use mainspring::{tick, Cmd, Message};
use tinct::{ColorProfile, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

const FRAME_PERIOD: Duration = Duration::from_millis(120);
const PARTICLES: usize = 8;
const GLYPHS: [char; 4] = ['·', '∙', '✦', '°'];

/// Timer message advancing the drift field by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftTickMsg {
    id: u64,
    tag: u64,
}

impl DriftTickMsg {
    #[must_use]
    pub fn new(id: u64, tag: u64) -> Self {
        Self { id, tag }
    }
}

/// A band of slowly drifting accent glyphs.
#[derive(Debug, Clone)]
pub struct DriftField {
    id: u64,
    tag: u64,
    frame: u64,
    rows: usize,
    enabled: bool,
}

impl DriftField {
    /// A field spanning `rows` lines; `enabled` gates all motion.
    #[must_use]
    pub fn new(rows: usize, enabled: bool) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            frame: 0,
            rows: rows.max(1),
            enabled,
        }
    }

    /// Instance id, carried by this field's ticks.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Lines of output produced by [`view`](Self::view).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Command to start the animation, `None` when motion is disabled.
    #[must_use]
    pub fn arm(&self) -> Option<Cmd> {
        if !self.enabled {
            return None;
        }
        let id = self.id;
        let tag = self.tag;
        Some(tick(FRAME_PERIOD, move |_| {
            Message::new(DriftTickMsg { id, tag })
        }))
    }

    /// Advance on a matching tick and keep the timer running.
    pub fn update(&mut self, msg: &Message) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<DriftTickMsg>()?;
        if tick_msg.id != self.id || tick_msg.tag != self.tag || !self.enabled {
            return None;
        }
        self.frame = self.frame.wrapping_add(1);
        self.arm()
    }

    /// Re-arm after an interruption, retiring any tick still in flight.
    pub fn resume(&mut self) -> Option<Cmd> {
        self.tag = self.tag.wrapping_add(1);
        self.arm()
    }

    /// Particle placements for the current frame at the given width.
    fn placements(&self, width: usize) -> Vec<(usize, usize, char)> {
        (0..PARTICLES)
            .map(|i| {
                let idx = i as u64;
                let pace = 1 + idx % 3;
                let phase = idx * 11 + (idx * idx) % 7;
                let col = ((self.frame * pace + phase * 5) % width as u64) as usize;
                (i % self.rows, col, GLYPHS[i % GLYPHS.len()])
            })
            .collect()
    }

    /// Render the band at `width` columns.
    #[must_use]
    pub fn view(&self, width: usize, palette: &Palette, profile: ColorProfile) -> String {
        let width = width.max(1);
        let style = Style::new()
            .profile(profile)
            .foreground(palette.accent.end)
            .faint();

        let mut grid = vec![vec![' '; width]; self.rows];
        for (row, col, glyph) in self.placements(width) {
            grid[row][col] = glyph;
        }
        grid.into_iter()
            .map(|chars| {
                let line: String = chars.into_iter().collect();
                let line = line.trim_end();
                if line.is_empty() {
                    String::new()
                } else {
                    style.render(line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
