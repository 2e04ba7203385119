//! Skills section: grouped proficiency bars.

use mainspring::{Cmd, Message};
use tinct::Style;

use crate::components::{level_bar, section_heading};
use crate::content::SKILL_GROUPS;
use crate::sections::{Section, SectionModel, ViewContext};

#[derive(Default)]
pub struct SkillsSection;

impl SkillsSection {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SectionModel for SkillsSection {
    fn section(&self) -> Section {
        Section::Skills
    }

    fn update(&mut self, _msg: &Message) -> Option<Cmd> {
        None
    }

    fn view(&self, ctx: &ViewContext<'_>) -> String {
        let mut out = section_heading("Skills", ctx.palette, ctx.profile);

        for group in SKILL_GROUPS {
            let title = Style::new()
                .profile(ctx.profile)
                .foreground(ctx.palette.secondary.start)
                .bold()
                .render(group.name);
            out.push_str("\n\n");
            out.push_str(&title);

            let name_col = group
                .skills
                .iter()
                .map(|s| s.name.chars().count())
                .max()
                .unwrap_or(0);
            // Leave room for the name column, a gap, and the percentage.
            let bar_width = ctx.width.saturating_sub(name_col + 8).clamp(10, 26);

            for skill in group.skills {
                let name = Style::new()
                    .profile(ctx.profile)
                    .foreground(ctx.palette.text_primary)
                    .render(&format!("{:<name_col$}", skill.name));
                let bar = level_bar(skill.level, bar_width, ctx.palette, ctx.profile);
                out.push('\n');
                out.push_str(&format!("{name}  {bar}"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycycle::{palette_for, TimeOfDay};
    use tinct::{strip_ansi, ColorProfile};

    fn render(width: usize) -> String {
        let palette = palette_for(TimeOfDay::Afternoon);
        let ctx = ViewContext {
            width,
            palette: &palette,
            segment: TimeOfDay::Afternoon,
            profile: ColorProfile::Ascii,
            animations: true,
        };
        strip_ansi(&SkillsSection::new().view(&ctx))
    }

    #[test]
    fn view_lists_every_group_and_skill() {
        let plain = render(80);
        for group in SKILL_GROUPS {
            assert!(plain.contains(group.name));
            for skill in group.skills {
                assert!(plain.contains(skill.name), "missing {}", skill.name);
            }
        }
    }

    #[test]
    fn bars_show_levels() {
        let plain = render(80);
        assert!(plain.contains("92%"));
        assert!(plain.contains("60%"));
    }

    #[test]
    fn narrow_width_still_renders() {
        let plain = render(20);
        assert!(plain.contains("Rust"));
    }
}
