//! Theme section: mode toggle, preview slider, and palette readout.
//!
//! The panel owns the mode controller, the slider widget, and the clock
//! they both read. Refresh ticks and apply notifications are routed here
//! by the app no matter which section is on screen, so the theme keeps
//! advancing while the user reads another page.

use daycycle::{
    palette_for, Clock, DomainError, ModeController, Palette, RefreshTickMsg, ThemeAppliedMsg,
    ThemeMode, ThemeSlider, TimeOfDay,
};
use mainspring::{Cmd, KeyMsg, KeyType, Message};
use tinct::gradient::gradient_bar;
use tinct::panel::{titled_panel, Border};
use tinct::{Color, Style};
use tracing::warn;

use crate::sections::{Section, SectionModel, ViewContext};

/// Track movement per arrow-key press, in slider units.
const NUDGE_STEP: f64 = 5.0;

pub struct ThemePanel {
    controller: ModeController,
    slider: ThemeSlider,
    clock: Box<dyn Clock + Send>,
}

impl ThemePanel {
    /// Build the panel in the requested mode.
    ///
    /// Manual mode starts on the clock's current segment unless `initial`
    /// overrides it. In auto mode `initial` has no effect.
    ///
    /// # Errors
    ///
    /// Fails when the clock reports an hour above 23.
    pub fn new(
        clock: Box<dyn Clock + Send>,
        mode: ThemeMode,
        initial: Option<TimeOfDay>,
    ) -> Result<Self, DomainError> {
        let mut controller = ModeController::new(clock.as_ref())?;
        if mode == ThemeMode::Manual {
            // Controllers start in auto; entering manual retires the
            // not-yet-armed refresh tick.
            controller.toggle(clock.as_ref())?;
        }
        if let Some(segment) = initial {
            controller.set_manual(segment);
        }
        let slider = ThemeSlider::new(controller.active());
        Ok(Self {
            controller,
            slider,
            clock,
        })
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.controller.mode()
    }

    /// The segment whose palette the whole app paints with.
    #[must_use]
    pub fn active(&self) -> TimeOfDay {
        self.controller.active()
    }

    /// Palette of the active segment.
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.controller.palette()
    }

    /// Whether the slider previews a segment that is not yet applied.
    #[must_use]
    pub fn has_pending_change(&self) -> bool {
        self.slider.has_pending_change()
    }

    /// Flip between auto and manual, re-syncing the slider.
    ///
    /// Returns the refresh command when entering auto mode. A clock
    /// failure leaves the mode unchanged.
    pub fn toggle_mode(&mut self) -> Option<Cmd> {
        match self.controller.toggle(self.clock.as_ref()) {
            Ok(cmd) => {
                self.slider.sync_committed(self.controller.active());
                cmd
            }
            Err(err) => {
                warn!(%err, "mode toggle skipped");
                None
            }
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        // The slider only exists in manual mode.
        if self.controller.mode() != ThemeMode::Manual {
            return None;
        }
        match key.key_type {
            KeyType::Left => {
                self.slider.nudge(-NUDGE_STEP);
                None
            }
            KeyType::Right => {
                self.slider.nudge(NUDGE_STEP);
                None
            }
            KeyType::Enter => self.slider.apply(),
            KeyType::Runes => {
                let digit = key.char().and_then(|c| c.to_digit(10))?;
                if (1..=4).contains(&digit) {
                    self.slider.quick_select(TimeOfDay::ALL[(digit - 1) as usize]);
                }
                None
            }
            _ => None,
        }
    }

    fn view_auto(&self, ctx: &ViewContext<'_>, inner: usize) -> String {
        let dim = Style::new().profile(ctx.profile).faint();
        let active_line = format!(
            "{} {}",
            self.active().glyph(),
            Style::new()
                .profile(ctx.profile)
                .foreground(ctx.palette.accent.start)
                .bold()
                .render(self.active().label()),
        );
        let mut content = String::new();
        content.push_str(&dim.render("Following the local clock."));
        content.push_str("\n\n");
        content.push_str(&active_line);
        content.push('\n');
        content.push_str(&dim.render("Checks the hour once a minute."));
        content.push_str("\n\n");
        content.push_str(&dim.render("Press t to pick a theme by hand."));

        let frame = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.accent.start);
        titled_panel("Theme · auto", &content, inner, Border::rounded(), &frame)
    }

    fn view_manual(&self, ctx: &ViewContext<'_>, inner: usize) -> String {
        let preview = self.slider.preview();
        let preview_palette = palette_for(preview);
        let dim = Style::new().profile(ctx.profile).faint();

        let mut content = String::new();
        content.push_str(&dim.render("Slide with ← →, jump with 1-4."));
        content.push_str("\n\n");
        content.push_str(&self.slider.view(inner.min(40), ctx.profile));
        content.push('\n');
        content.push_str(&self.segment_row(preview, ctx));
        content.push_str("\n\n");
        content.push_str(&self.status_line(preview, ctx));
        content.push('\n');
        content.push_str(&Self::swatch_row(&preview_palette, ctx));

        let frame = Style::new()
            .profile(ctx.profile)
            .foreground(preview_palette.accent.start);
        titled_panel("Theme · manual", &content, inner, Border::rounded(), &frame)
    }

    /// Quick-select row with the previewed segment highlighted.
    fn segment_row(&self, preview: TimeOfDay, ctx: &ViewContext<'_>) -> String {
        TimeOfDay::ALL
            .into_iter()
            .enumerate()
            .map(|(i, segment)| {
                let cell = format!("{} {} {}", i + 1, segment.glyph(), segment.label());
                if segment == preview {
                    Style::new()
                        .profile(ctx.profile)
                        .foreground(palette_for(segment).accent.start)
                        .bold()
                        .render(&cell)
                } else {
                    Style::new().profile(ctx.profile).faint().render(&cell)
                }
            })
            .collect::<Vec<_>>()
            .join("   ")
    }

    fn status_line(&self, preview: TimeOfDay, ctx: &ViewContext<'_>) -> String {
        if self.slider.has_pending_change() {
            Style::new()
                .profile(ctx.profile)
                .foreground(palette_for(preview).accent.start)
                .bold()
                .render(&format!("Enter applies the {} theme", preview.label()))
        } else {
            Style::new()
                .profile(ctx.profile)
                .faint()
                .render(&format!("{} theme applied", self.slider.committed().label()))
        }
    }

    /// One gradient swatch per emphasis role of the previewed palette.
    fn swatch_row(palette: &Palette, ctx: &ViewContext<'_>) -> String {
        let swatch = |pair: daycycle::GradientPair| {
            gradient_bar(
                6,
                '█',
                &Color::from(pair.start),
                &Color::from(pair.end),
                ctx.profile,
            )
        };
        format!(
            "{} {} {}",
            swatch(palette.primary),
            swatch(palette.secondary),
            swatch(palette.accent),
        )
    }
}

impl SectionModel for ThemePanel {
    fn section(&self) -> Section {
        Section::Theme
    }

    fn init(&self) -> Option<Cmd> {
        self.controller.init()
    }

    fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if msg.is::<RefreshTickMsg>() {
            return self.controller.update(msg, self.clock.as_ref());
        }
        if let Some(applied) = msg.downcast_ref::<ThemeAppliedMsg>() {
            if applied.id == self.slider.id() {
                self.controller.set_manual(applied.time_of_day);
                self.slider.sync_committed(applied.time_of_day);
            }
            return None;
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        None
    }

    fn view(&self, ctx: &ViewContext<'_>) -> String {
        let inner = ctx.width.saturating_sub(4).clamp(24, 56);
        match self.controller.mode() {
            ThemeMode::Auto => self.view_auto(ctx, inner),
            ThemeMode::Manual => self.view_manual(ctx, inner),
        }
    }

    fn hints(&self) -> &'static str {
        match self.controller.mode() {
            ThemeMode::Auto => "t manual mode",
            ThemeMode::Manual => "←/→ slide  1-4 jump  enter apply",
        }
    }
}
