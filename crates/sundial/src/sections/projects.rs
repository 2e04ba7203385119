//! Projects section: one bordered card per project.

use mainspring::{Cmd, Message};
use tinct::panel::{titled_panel, Border};
use tinct::Style;

use crate::components::{section_heading, tech_chip, wrap};
use crate::content::PROJECTS;
use crate::sections::{Section, SectionModel, ViewContext};

#[derive(Default)]
pub struct ProjectsSection;

impl ProjectsSection {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SectionModel for ProjectsSection {
    fn section(&self) -> Section {
        Section::Projects
    }

    fn update(&mut self, _msg: &Message) -> Option<Cmd> {
        None
    }

    fn view(&self, ctx: &ViewContext<'_>) -> String {
        // Inner card width: frame and padding take four columns.
        let inner = ctx.width.saturating_sub(4).clamp(20, 70);
        let body = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.text_primary);
        let dim = Style::new().profile(ctx.profile).faint();
        let frame = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.secondary.end);

        let mut blocks = vec![section_heading("Projects", ctx.palette, ctx.profile)];
        for project in PROJECTS {
            let mut card = wrap(project.blurb, inner)
                .iter()
                .map(|line| body.render(line))
                .collect::<Vec<_>>()
                .join("\n");
            card.push_str("\n\n");
            let chips: Vec<String> = project
                .tech
                .iter()
                .map(|tag| tech_chip(tag, ctx.palette, ctx.profile))
                .collect();
            card.push_str(&chips.join(" "));
            card.push('\n');
            card.push_str(&dim.render(project.link));

            blocks.push(titled_panel(
                project.name,
                &card,
                inner,
                Border::rounded(),
                &frame,
            ));
        }
        blocks.join("\n\n")
    }
}
