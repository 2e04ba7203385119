//! About section: bio copy.

use mainspring::{Cmd, Message};
use tinct::Style;

use crate::components::{section_heading, wrap};
use crate::content::PROFILE;
use crate::sections::{Section, SectionModel, ViewContext};

#[derive(Default)]
pub struct AboutSection;

impl AboutSection {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SectionModel for AboutSection {
    fn section(&self) -> Section {
        Section::About
    }

    fn update(&mut self, _msg: &Message) -> Option<Cmd> {
        None
    }

    fn view(&self, ctx: &ViewContext<'_>) -> String {
        let measure = ctx.width.min(76);
        let body = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.text_primary);

        let mut out = section_heading("About", ctx.palette, ctx.profile);
        out.push_str("\n\n");
        let paragraphs: Vec<String> = PROFILE
            .bio
            .iter()
            .map(|para| {
                wrap(para, measure)
                    .iter()
                    .map(|line| body.render(line))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect();
        out.push_str(&paragraphs.join("\n\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycycle::{palette_for, TimeOfDay};
    use tinct::{strip_ansi, ColorProfile};

    #[test]
    fn view_includes_every_paragraph() {
        let about = AboutSection::new();
        let palette = palette_for(TimeOfDay::Morning);
        let ctx = ViewContext {
            width: 60,
            palette: &palette,
            segment: TimeOfDay::Morning,
            profile: ColorProfile::Ascii,
            animations: true,
        };
        let plain = strip_ansi(&about.view(&ctx));
        // One recognizable phrase from each paragraph.
        assert!(plain.contains("below the browser"));
        assert!(plain.contains("shipped product UI"));
        assert!(plain.contains("film cameras"));
    }

    #[test]
    fn lines_fit_the_measure() {
        let about = AboutSection::new();
        let palette = palette_for(TimeOfDay::Night);
        let ctx = ViewContext {
            width: 40,
            palette: &palette,
            segment: TimeOfDay::Night,
            profile: ColorProfile::Ascii,
            animations: true,
        };
        let plain = strip_ansi(&about.view(&ctx));
        assert!(plain.lines().all(|line| line.chars().count() <= 40));
    }
}
