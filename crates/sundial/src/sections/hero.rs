//! Landing section: greeting, name, and animated tagline.

use daycycle::TimeOfDay;
use mainspring::{batch, Cmd, KeyMsg, KeyType, Message};
use tinct::gradient::{gradient_text, wash_row};
use tinct::{Color, Style};

use crate::components::{key_hints, DriftField, Typewriter};
use crate::content::PROFILE;
use crate::sections::{Section, SectionModel, ViewContext};

use std::time::Duration;

/// The landing section.
///
/// The tagline types itself out once at startup; a drift field floats
/// beneath the name. Both idle quietly when animations are disabled.
pub struct HeroSection {
    tagline: Typewriter,
    drift: DriftField,
}

impl HeroSection {
    #[must_use]
    pub fn new(animations: bool) -> Self {
        let mut tagline = Typewriter::new(PROFILE.tagline)
            .with_speed(Duration::from_millis(45))
            .with_delay(Duration::from_millis(400));
        if !animations {
            tagline.skip();
        }
        Self {
            tagline,
            drift: DriftField::new(3, animations),
        }
    }

    fn greeting_line(segment: TimeOfDay) -> &'static str {
        segment.greeting()
    }
}

impl SectionModel for HeroSection {
    fn section(&self) -> Section {
        Section::Hero
    }

    fn init(&self) -> Option<Cmd> {
        let tagline = if self.tagline.is_done() {
            None
        } else {
            Some(self.tagline.arm())
        };
        batch(vec![tagline, self.drift.arm()])
    }

    fn on_enter(&mut self) -> Option<Cmd> {
        batch(vec![self.tagline.resume(), self.drift.resume()])
    }

    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if key.key_type == KeyType::Space && !self.tagline.is_done() {
                self.tagline.skip();
            }
            return None;
        }
        batch(vec![self.tagline.update(msg), self.drift.update(msg)])
    }

    fn view(&self, ctx: &ViewContext<'_>) -> String {
        let palette = ctx.palette;
        let greeting = Style::new()
            .profile(ctx.profile)
            .foreground(palette.accent.start)
            .bold()
            .render(Self::greeting_line(ctx.segment));
        let name = gradient_text(
            PROFILE.name,
            &Color::from(palette.primary.start),
            &Color::from(palette.primary.end),
            ctx.profile,
        );
        let title = gradient_text(
            PROFILE.title,
            &Color::from(palette.secondary.start),
            &Color::from(palette.secondary.end),
            ctx.profile,
        );
        let location = Style::new()
            .profile(ctx.profile)
            .faint()
            .render(PROFILE.location);
        let horizon = wash_row(
            ctx.width,
            &[
                Color::from(palette.background.start),
                Color::from(palette.background.mid),
                Color::from(palette.background.end),
            ],
            ctx.profile,
        );
        let invite = key_hints(
            &[("2-7", "explore"), ("t", "toggle theme")],
            ctx.profile,
        );

        let mut out = String::new();
        out.push_str(&greeting);
        out.push_str("\n\n");
        out.push_str(&name);
        out.push('\n');
        out.push_str(&title);
        out.push_str("\n\n");
        out.push_str(&self.tagline.view(palette, ctx.profile));
        out.push_str("\n\n");
        out.push_str(&self.drift.view(ctx.width, palette, ctx.profile));
        out.push('\n');
        out.push_str(&horizon);
        out.push_str("\n\n");
        out.push_str(&location);
        out.push('\n');
        out.push_str(&invite);
        out
    }

    fn hints(&self) -> &'static str {
        "space skip intro"
    }
}
