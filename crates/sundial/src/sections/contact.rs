//! Contact section: links and sign-off.

use mainspring::{Cmd, Message};
use tinct::Style;

use crate::components::{section_heading, wrap};
use crate::content::{CONTACT_LINKS, SIGN_OFF};
use crate::sections::{Section, SectionModel, ViewContext};

#[derive(Default)]
pub struct ContactSection;

impl ContactSection {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SectionModel for ContactSection {
    fn section(&self) -> Section {
        Section::Contact
    }

    fn update(&mut self, _msg: &Message) -> Option<Cmd> {
        None
    }

    fn view(&self, ctx: &ViewContext<'_>) -> String {
        let label_col = CONTACT_LINKS
            .iter()
            .map(|link| link.label.chars().count())
            .max()
            .unwrap_or(0);
        let label_style = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.text_primary)
            .bold();
        let value_style = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.accent.start)
            .underline();
        let body = Style::new()
            .profile(ctx.profile)
            .foreground(ctx.palette.text_secondary);

        let mut out = section_heading("Contact", ctx.palette, ctx.profile);
        out.push('\n');
        for link in CONTACT_LINKS {
            out.push('\n');
            out.push_str(&label_style.render(&format!("{:<label_col$}", link.label)));
            out.push_str("  ");
            out.push_str(&value_style.render(link.value));
        }
        out.push_str("\n\n");
        let sign_off = wrap(SIGN_OFF, ctx.width.min(76))
            .iter()
            .map(|line| body.render(line))
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str(&sign_off);
        out
    }
}
