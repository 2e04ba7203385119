//! Top-level model: section routing and app chrome.
//!
//! [`App`] owns the section models and decides where each message goes.
//! It also renders everything around the content area: the progress
//! mark, the tab bar, and the footer.
//!
//! Theme traffic is special-cased: refresh ticks and apply notifications
//! always reach the theme panel, whatever section is on screen, so the
//! palette keeps tracking the clock in the background.

use daycycle::{
    Clock, DomainError, Palette, RefreshTickMsg, SystemClock, ThemeAppliedMsg, ThemeMode, TimeOfDay,
};
use mainspring::{batch, quit, Cmd, KeyMsg, KeyType, Message, Model, WindowSizeMsg};
use tinct::panel::{titled_panel, Border};
use tinct::{visible_width, ColorProfile, Style};

use crate::components::scroll_mark;
use crate::config::Config;
use crate::sections::{Section, SectionModel, Sections, ViewContext};

/// Rows taken by chrome around the content area: progress mark, tab bar,
/// two separators, and the footer.
const CHROME_ROWS: usize = 5;

/// The whole UI as one model.
pub struct App {
    /// Resolved runtime configuration.
    config: Config,
    /// Color profile every render goes through.
    profile: ColorProfile,
    /// Section models.
    sections: Sections,
    /// Section currently on screen.
    current: Section,
    /// Scroll offset into the current section, in lines.
    scroll: usize,
    /// Terminal size in cells.
    width: usize,
    height: usize,
    /// Set once the first window size message arrives.
    ready: bool,
    /// Whether the help overlay is shown.
    show_help: bool,
}

impl App {
    /// Create the application on the system clock.
    ///
    /// # Errors
    ///
    /// Fails when the clock reports an hour above 23.
    pub fn new(config: Config) -> Result<Self, DomainError> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create the application on an explicit clock (used by tests).
    ///
    /// # Errors
    ///
    /// Fails when the clock reports an hour above 23.
    pub fn with_clock(config: Config, clock: Box<dyn Clock + Send>) -> Result<Self, DomainError> {
        let profile = config.color_profile();
        let sections = Sections::new(
            clock,
            config.mode,
            config.time_of_day,
            config.animations,
        )?;
        Ok(Self {
            config,
            profile,
            sections,
            current: Section::Hero,
            scroll: 0,
            width: 80,
            height: 24,
            ready: false,
            show_help: false,
        })
    }

    /// Section currently on screen.
    #[must_use]
    pub fn current(&self) -> Section {
        self.current
    }

    /// Theme mode of the panel.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.sections.theme.mode()
    }

    /// Segment whose palette is active.
    #[must_use]
    pub fn active_segment(&self) -> TimeOfDay {
        self.sections.theme.active()
    }

    /// Whether the theme slider previews an unapplied segment.
    #[must_use]
    pub fn has_pending_preview(&self) -> bool {
        self.sections.theme.has_pending_change()
    }

    /// Navigate to a new section, resetting scroll.
    fn navigate(&mut self, section: Section) -> Option<Cmd> {
        if section == self.current {
            return None;
        }
        self.current = section;
        self.scroll = 0;
        self.sections.get_mut(section).on_enter()
    }

    /// Cycle through sections in tab order.
    fn cycle(&mut self, step: isize) -> Option<Cmd> {
        let sections = Section::ALL;
        let idx = sections
            .iter()
            .position(|s| *s == self.current)
            .unwrap_or(0);
        #[expect(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let next = (idx as isize + step).rem_euclid(sections.len() as isize) as usize;
        self.navigate(sections[next])
    }

    /// Keys that work the same on every section.
    fn handle_global_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        match key.key_type {
            KeyType::CtrlC | KeyType::Esc if !self.show_help => return Some(quit()),
            KeyType::Esc if self.show_help => {
                self.show_help = false;
                return None;
            }
            KeyType::Tab if !self.show_help => return self.cycle(1),
            KeyType::ShiftTab if !self.show_help => return self.cycle(-1),
            KeyType::Runes => match key.runes.as_slice() {
                ['q'] if !self.show_help => return Some(quit()),
                ['?'] => {
                    self.show_help = !self.show_help;
                    return None;
                }
                ['t'] if !self.show_help => return self.sections.theme.toggle_mode(),
                [c] if !self.show_help => {
                    if let Some(section) = Section::from_shortcut(*c) {
                        // On the theme panel in manual mode the digit row
                        // 1-4 belongs to quick select, not navigation.
                        let panel_owns_digit = self.current == Section::Theme
                            && self.theme_mode() == ThemeMode::Manual
                            && ('1'..='4').contains(c);
                        if !panel_owns_digit {
                            return self.navigate(section);
                        }
                    }
                }
                _ => {}
            },
            _ => {}
        }
        None
    }

    /// Handle scroll keys; returns whether the key was consumed.
    fn handle_scroll_key(&mut self, key: &KeyMsg) -> bool {
        #[expect(clippy::cast_possible_wrap)]
        let page = self.viewport_height() as isize;
        match key.key_type {
            KeyType::Up => self.scroll_by(-1),
            KeyType::Down => self.scroll_by(1),
            KeyType::PgUp => self.scroll_by(-page),
            KeyType::PgDown => self.scroll_by(page),
            KeyType::Home => self.scroll = 0,
            KeyType::End => self.scroll = self.max_scroll(),
            KeyType::Runes => match key.runes.as_slice() {
                ['j'] => self.scroll_by(1),
                ['k'] => self.scroll_by(-1),
                _ => return false,
            },
            _ => return false,
        }
        true
    }

    fn scroll_by(&mut self, delta: isize) {
        let next = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta.unsigned_abs())
        };
        self.scroll = next.min(self.max_scroll());
    }

    fn viewport_height(&self) -> usize {
        self.height.saturating_sub(CHROME_ROWS).max(1)
    }

    fn content_width(&self) -> usize {
        self.width.saturating_sub(4).max(20)
    }

    /// Render the current section into lines at the content width.
    fn section_lines(&self) -> Vec<String> {
        let palette = self.sections.theme.palette();
        let ctx = ViewContext {
            width: self.content_width(),
            palette: &palette,
            segment: self.sections.theme.active(),
            profile: self.profile,
            animations: self.config.animations,
        };
        self.sections
            .get(self.current)
            .view(&ctx)
            .lines()
            .map(String::from)
            .collect()
    }

    fn max_scroll(&self) -> usize {
        self.section_lines()
            .len()
            .saturating_sub(self.viewport_height())
    }

    /// Render the tab bar with the mode chip right-aligned.
    fn render_tabs(&self, palette: &Palette) -> String {
        let cells: Vec<String> = Section::ALL
            .iter()
            .map(|&section| {
                let label = format!("{} {}", section.shortcut(), section.name());
                if section == self.current {
                    Style::new()
                        .profile(self.profile)
                        .foreground(palette.primary.start)
                        .bold()
                        .render(&label)
                } else {
                    Style::new().profile(self.profile).faint().render(&label)
                }
            })
            .collect();
        let tabs = cells.join("  ");

        let active = self.sections.theme.active();
        let chip = Style::new()
            .profile(self.profile)
            .foreground(palette.accent.start)
            .render(&format!(
                "{} {} · {}",
                active.glyph(),
                active.label(),
                self.theme_mode()
            ));

        let gap = self
            .width
            .saturating_sub(visible_width(&tabs) + visible_width(&chip));
        format!("{tabs}{}{chip}", " ".repeat(gap))
    }

    fn render_footer(&self) -> String {
        let section_hints = self.sections.get(self.current).hints();
        let global_hints = "1-7 sections  tab next  ? help  q quit";
        let text = if section_hints.is_empty() {
            global_hints.to_string()
        } else {
            format!("{section_hints}  |  {global_hints}")
        };
        Style::new()
            .profile(self.profile)
            .faint()
            .render(&format!("  {text}"))
    }

    /// Render the help overlay, roughly centered.
    fn render_help(&self, palette: &Palette) -> String {
        let help_text = [
            "Navigation",
            "  1-7              jump to a section",
            "  tab / shift-tab  next / previous section",
            "  up/down, j/k     scroll",
            "  pgup / pgdn      scroll by a page",
            "  home / end       top / bottom",
            "",
            "Theme",
            "  t                toggle auto / manual",
            "  left / right     slide (manual, theme section)",
            "  1-4              quick select (manual, theme section)",
            "  enter            apply the preview",
            "",
            "Press ? or esc to close",
        ]
        .join("\n");

        let frame = Style::new()
            .profile(self.profile)
            .foreground(palette.accent.start);
        let panel = titled_panel("Help", &help_text, 44, Border::rounded(), &frame);

        let panel_width = panel
            .lines()
            .next()
            .map(visible_width)
            .unwrap_or(0);
        let indent = " ".repeat(self.width.saturating_sub(panel_width) / 2);
        let top = self
            .height
            .saturating_sub(panel.lines().count())
            / 2;

        let mut out = "\n".repeat(top);
        for line in panel.lines() {
            out.push_str(&indent);
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        batch(
            Section::ALL
                .iter()
                .map(|&section| self.sections.get(section).init())
                .collect(),
        )
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        // Handle window resize.
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = usize::from(size.width);
            self.height = usize::from(size.height);
            self.ready = true;
            // A shrink must not strand the offset past the end.
            self.scroll = self.scroll.min(self.max_scroll());
            return None;
        }

        // Theme traffic bypasses the current-section router.
        if msg.is::<RefreshTickMsg>() || msg.is::<ThemeAppliedMsg>() {
            return self.sections.theme.update(&msg);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if let Some(cmd) = self.handle_global_key(key) {
                return Some(cmd);
            }
            if self.show_help {
                return None;
            }
            if self.handle_scroll_key(key) {
                return None;
            }
        }

        if self.show_help {
            return None;
        }
        self.sections.get_mut(self.current).update(&msg)
    }

    fn view(&self) -> String {
        if !self.ready {
            return "Loading...".to_string();
        }

        let palette = self.sections.theme.palette();
        if self.show_help {
            return self.render_help(&palette);
        }

        let lines = self.section_lines();
        let viewport = self.viewport_height();
        let max_scroll = lines.len().saturating_sub(viewport);
        let offset = self.scroll.min(max_scroll);

        let mark = scroll_mark::render(offset, max_scroll, self.width, &palette, self.profile);
        let tabs = self.render_tabs(&palette);
        let body = lines
            .iter()
            .skip(offset)
            .take(viewport)
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        let footer = self.render_footer();

        format!("{mark}\n{tabs}\n\n{body}\n\n{footer}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycycle::FixedClock;
    use tinct::strip_ansi;

    fn app_at(hour: u32) -> App {
        let config = Config {
            animations: false,
            ..Config::default()
        };
        App::with_clock(config, Box::new(FixedClock(hour))).expect("valid hour")
    }

    fn sized(hour: u32) -> App {
        sized_to(hour, 100, 30)
    }

    fn sized_to(hour: u32, width: u16, height: u16) -> App {
        let mut app = app_at(hour);
        app.update(Message::new(WindowSizeMsg { width, height }));
        app
    }

    fn press(app: &mut App, c: char) -> Option<Cmd> {
        app.update(Message::new(KeyMsg::from_char(c)))
    }

    fn press_key(app: &mut App, key_type: KeyType) -> Option<Cmd> {
        app.update(Message::new(KeyMsg::from_type(key_type)))
    }

    #[test]
    fn shows_loading_before_window_size() {
        let app = app_at(9);
        assert_eq!(app.view(), "Loading...");
    }

    #[test]
    fn window_size_makes_the_app_ready() {
        let app = sized(9);
        assert_ne!(app.view(), "Loading...");
    }

    #[test]
    fn digits_navigate_between_sections() {
        let mut app = sized(9);
        assert_eq!(app.current(), Section::Hero);

        press(&mut app, '3');
        assert_eq!(app.current(), Section::Skills);

        press(&mut app, '7');
        assert_eq!(app.current(), Section::Theme);
    }

    #[test]
    fn tab_cycles_and_wraps() {
        let mut app = sized(9);
        press_key(&mut app, KeyType::Tab);
        assert_eq!(app.current(), Section::About);

        press_key(&mut app, KeyType::ShiftTab);
        press_key(&mut app, KeyType::ShiftTab);
        assert_eq!(app.current(), Section::Theme);
    }

    #[test]
    fn q_and_esc_quit() {
        let mut app = sized(9);
        assert!(press(&mut app, 'q').is_some());

        let mut app = sized(9);
        assert!(press_key(&mut app, KeyType::Esc).is_some());
    }

    #[test]
    fn help_overlay_swallows_esc() {
        let mut app = sized(9);
        press(&mut app, '?');
        assert!(strip_ansi(&app.view()).contains("Help"));

        // First esc closes help, second one quits.
        assert!(press_key(&mut app, KeyType::Esc).is_none());
        assert!(press_key(&mut app, KeyType::Esc).is_some());
    }

    #[test]
    fn t_toggles_the_mode_from_any_section() {
        let mut app = sized(9);
        assert_eq!(app.theme_mode(), ThemeMode::Auto);

        press(&mut app, 't');
        assert_eq!(app.theme_mode(), ThemeMode::Manual);

        press(&mut app, 't');
        assert_eq!(app.theme_mode(), ThemeMode::Auto);
    }

    #[test]
    fn panel_owns_digits_in_manual_mode() {
        let mut app = sized(9);
        press(&mut app, '7');
        press(&mut app, 't');
        assert_eq!(app.theme_mode(), ThemeMode::Manual);

        // 1-4 quick-select instead of navigating away.
        press(&mut app, '3');
        assert_eq!(app.current(), Section::Theme);
        assert!(app.has_pending_preview());

        // 5-7 still navigate.
        press(&mut app, '5');
        assert_eq!(app.current(), Section::Projects);
    }

    #[test]
    fn digits_navigate_from_theme_in_auto_mode() {
        let mut app = sized(9);
        press(&mut app, '7');
        assert_eq!(app.theme_mode(), ThemeMode::Auto);

        press(&mut app, '2');
        assert_eq!(app.current(), Section::About);
    }

    #[test]
    fn apply_round_trip_changes_the_active_segment() {
        let mut app = sized(9);
        press(&mut app, '7');
        press(&mut app, 't');
        press(&mut app, '4');

        let cmd = press_key(&mut app, KeyType::Enter).expect("apply command");
        let applied = cmd.execute().expect("applied message");
        app.update(applied);

        assert_eq!(app.active_segment(), TimeOfDay::Night);
        assert!(!app.has_pending_preview());
    }

    #[test]
    fn scroll_clamps_at_both_ends() {
        // Short window so the experience section overflows the viewport.
        let mut app = sized_to(9, 80, 12);
        press(&mut app, '4');

        press_key(&mut app, KeyType::End);
        let bottom = app.scroll;
        assert!(bottom > 0);
        press_key(&mut app, KeyType::Down);
        assert_eq!(app.scroll, bottom);

        press_key(&mut app, KeyType::Home);
        assert_eq!(app.scroll, 0);
        press(&mut app, 'k');
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn navigation_resets_scroll() {
        let mut app = sized_to(9, 80, 12);
        press(&mut app, '4');
        press(&mut app, 'j');
        press(&mut app, 'j');
        assert!(app.scroll > 0);

        press(&mut app, '2');
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn view_names_the_current_section_in_the_tab_bar() {
        let mut app = sized(21);
        press(&mut app, '6');
        let plain = strip_ansi(&app.view());
        assert!(plain.contains("6 Contact"));
        assert!(plain.contains("Evening · auto"));
    }
}
