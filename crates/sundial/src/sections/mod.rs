//! Section models for `sundial`.
//!
//! Each portfolio section implements the [`SectionModel`] trait, giving
//! the app a consistent interface to delegate update and view calls to
//! whichever section is on screen.

mod about;
mod contact;
mod experience;
mod hero;
mod projects;
mod skills;
mod theme_panel;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
pub use theme_panel::ThemePanel;

use daycycle::{Clock, DomainError, Palette, ThemeMode, TimeOfDay};
use mainspring::{Cmd, Message};
use tinct::ColorProfile;

/// The navigable sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
    Theme,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
        Section::Theme,
    ];

    /// Tab-bar label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
            Section::Theme => "Theme",
        }
    }

    /// Digit key that jumps straight to this section.
    #[must_use]
    pub const fn shortcut(self) -> char {
        match self {
            Section::Hero => '1',
            Section::About => '2',
            Section::Skills => '3',
            Section::Experience => '4',
            Section::Projects => '5',
            Section::Contact => '6',
            Section::Theme => '7',
        }
    }

    /// Section for a digit key, if any.
    #[must_use]
    pub const fn from_shortcut(c: char) -> Option<Section> {
        match c {
            '1' => Some(Section::Hero),
            '2' => Some(Section::About),
            '3' => Some(Section::Skills),
            '4' => Some(Section::Experience),
            '5' => Some(Section::Projects),
            '6' => Some(Section::Contact),
            '7' => Some(Section::Theme),
            _ => None,
        }
    }
}

/// Everything a section needs to render itself.
///
/// Width is the usable content width; vertical space is unconstrained
/// because the app scrolls section output line by line.
pub struct ViewContext<'a> {
    pub width: usize,
    pub palette: &'a Palette,
    pub segment: TimeOfDay,
    pub profile: ColorProfile,
    pub animations: bool,
}

/// Trait for section models that can be routed to.
pub trait SectionModel {
    /// The section this model renders.
    fn section(&self) -> Section;

    /// Startup command, run once when the program begins.
    fn init(&self) -> Option<Cmd> {
        None
    }

    /// Called when the section becomes active (navigated to).
    fn on_enter(&mut self) -> Option<Cmd> {
        None
    }

    /// React to a routed message, optionally scheduling a command.
    fn update(&mut self, msg: &Message) -> Option<Cmd>;

    /// Render the section content.
    fn view(&self, ctx: &ViewContext<'_>) -> String;

    /// Context-sensitive key hints for the footer.
    fn hints(&self) -> &'static str {
        ""
    }
}

/// Container for all section models.
///
/// The theme panel is a named field so the app can reach its typed
/// surface (mode, palette, pending state) without downcasting.
pub struct Sections {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub skills: SkillsSection,
    pub experience: ExperienceSection,
    pub projects: ProjectsSection,
    pub contact: ContactSection,
    pub theme: ThemePanel,
}

impl Sections {
    /// Build every section.
    ///
    /// # Errors
    ///
    /// Fails when the clock reports an hour above 23.
    pub fn new(
        clock: Box<dyn Clock + Send>,
        mode: ThemeMode,
        initial: Option<TimeOfDay>,
        animations: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            hero: HeroSection::new(animations),
            about: AboutSection::new(),
            skills: SkillsSection::new(),
            experience: ExperienceSection::new(),
            projects: ProjectsSection::new(),
            contact: ContactSection::new(),
            theme: ThemePanel::new(clock, mode, initial)?,
        })
    }

    /// Reference to the model for `section`.
    pub fn get(&self, section: Section) -> &dyn SectionModel {
        match section {
            Section::Hero => &self.hero,
            Section::About => &self.about,
            Section::Skills => &self.skills,
            Section::Experience => &self.experience,
            Section::Projects => &self.projects,
            Section::Contact => &self.contact,
            Section::Theme => &self.theme,
        }
    }

    /// Mutable reference to the model for `section`.
    pub fn get_mut(&mut self, section: Section) -> &mut dyn SectionModel {
        match section {
            Section::Hero => &mut self.hero,
            Section::About => &mut self.about,
            Section::Skills => &mut self.skills,
            Section::Experience => &mut self.experience,
            Section::Projects => &mut self.projects,
            Section::Contact => &mut self.contact,
            Section::Theme => &mut self.theme,
        }
    }
}
