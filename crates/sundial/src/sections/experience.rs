//! Experience section: work history, newest first.

use mainspring::{Cmd, Message};
use tinct::Style;

use crate::components::{section_heading, wrap};
use crate::content::POSITIONS;
use crate::sections::{Section, SectionModel, ViewContext};

#[derive(Default)]
pub struct ExperienceSection;

impl ExperienceSection {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SectionModel for ExperienceSection {
    fn section(&self) -> Section {
        Section::Experience
    }

    fn update(&mut self, _msg: &Message) -> Option<Cmd> {
        None
    }

    fn view(&self, ctx: &ViewContext<'_>) -> String {
        let measure = ctx.width.min(76);
        let role_style = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.text_primary)
            .bold();
        let company_style = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.secondary.start);
        let dim = Style::new().profile(ctx.profile).faint();
        let body = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.text_secondary);
        let bullet = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.accent.start);

        let mut blocks = vec![section_heading("Experience", ctx.palette, ctx.profile)];
        for position in POSITIONS {
            let mut block = format!(
                "{} {} {}\n{}",
                role_style.render(position.role),
                dim.render("·"),
                company_style.render(position.company),
                dim.render(position.period),
            );
            for line in wrap(position.summary, measure) {
                block.push('\n');
                block.push_str(&body.render(&line));
            }
            for highlight in position.highlights {
                // Hanging indent under the bullet.
                for (i, line) in wrap(highlight, measure.saturating_sub(2)).iter().enumerate() {
                    block.push('\n');
                    if i == 0 {
                        block.push_str(&bullet.render("•"));
                        block.push(' ');
                    } else {
                        block.push_str("  ");
                    }
                    block.push_str(&body.render(line));
                }
            }
            blocks.push(block);
        }
        blocks.join("\n\n")
    }
}
