//! Portfolio content for `sundial`.
//!
//! All copy lives here as plain static data: the profile, skill groups,
//! work history, project cards, and contact links the sections render.
//! Keeping it in one module makes the rest of the app pure presentation
//! and keeps string literals out of layout code.

/// Identity block for the hero section.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    /// Bio paragraphs for the about section.
    pub bio: &'static [&'static str],
}

/// A single skill with a 0-100 proficiency level.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

/// A titled group of related skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

/// One position in the work history, newest first.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

/// A project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub name: &'static str,
    pub blurb: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

/// A contact link (label + address).
#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Iris Calloway",
    title: "Systems Engineer & Terminal Tooling Enthusiast",
    tagline: "I build fast, honest software for people who live in a shell.",
    location: "Portland, OR",
    bio: &[
        "I spend most of my time a few layers below the browser: command-line \
         tools, data plumbing, and the occasional interpreter. I care about \
         software that starts instantly, fails loudly, and never surprises \
         the person holding the keyboard.",
        "Before going deep on systems work I shipped product UI for several \
         years, which left me with strong opinions about feedback, latency, \
         and the difference between a feature and a demo.",
        "Away from a terminal I restore film cameras, run slowly but \
         stubbornly, and keep a garden that is mostly weeds with excellent \
         morale.",
    ],
};

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        name: "Languages",
        skills: &[
            Skill { name: "Rust", level: 92 },
            Skill { name: "Go", level: 80 },
            Skill { name: "TypeScript", level: 76 },
            Skill { name: "Python", level: 70 },
        ],
    },
    SkillGroup {
        name: "Infrastructure",
        skills: &[
            Skill { name: "Linux", level: 88 },
            Skill { name: "PostgreSQL", level: 78 },
            Skill { name: "Kubernetes", level: 66 },
            Skill { name: "Terraform", level: 60 },
        ],
    },
    SkillGroup {
        name: "Practice",
        skills: &[
            Skill { name: "Performance profiling", level: 85 },
            Skill { name: "API design", level: 82 },
            Skill { name: "Incident response", level: 74 },
            Skill { name: "Technical writing", level: 72 },
        ],
    },
];

pub const POSITIONS: &[Position] = &[
    Position {
        role: "Staff Engineer",
        company: "Driftworks",
        period: "2022 - present",
        summary: "Own the ingestion path of a telemetry platform moving a few \
                  billion events a day.",
        highlights: &[
            "Rewrote the hot path from a garbage-collected prototype into a \
             Rust pipeline, cutting p99 latency from 900ms to 40ms",
            "Designed the backpressure protocol used by every collector agent",
            "Mentor four engineers across two teams",
        ],
    },
    Position {
        role: "Senior Software Engineer",
        company: "Cobalt Systems",
        period: "2019 - 2022",
        summary: "Built internal developer tooling for a 300-person \
                  engineering org.",
        highlights: &[
            "Shipped a build-cache service that took median CI time from 22 \
             to 7 minutes",
            "Led the migration of 40 services to structured logging",
        ],
    },
    Position {
        role: "Software Engineer",
        company: "Harbor Analytics",
        period: "2016 - 2019",
        summary: "Full-stack work on a dashboard product for small logistics \
                  firms.",
        highlights: &[
            "First engineer on the reporting team; grew it to five",
            "Kept a legacy ETL system alive long enough to replace it",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "tidewatch",
        blurb: "A terminal dashboard for coastal tide and weather data, with \
                offline caching for spotty harbor wifi.",
        tech: &["Rust", "SQLite", "NOAA API"],
        link: "github.com/icalloway/tidewatch",
    },
    Project {
        name: "quern",
        blurb: "An embeddable expression language for log routing rules. \
                Compiles filters to a small bytecode VM.",
        tech: &["Rust", "nom", "WASM"],
        link: "github.com/icalloway/quern",
    },
    Project {
        name: "ledgerline",
        blurb: "Plain-text double-entry accounting with a reconciliation TUI. \
                My own books run on it.",
        tech: &["Go", "Bubble Tea"],
        link: "github.com/icalloway/ledgerline",
    },
    Project {
        name: "darkroom-db",
        blurb: "Catalog and development-log software for film photographers. \
                Tracks rolls, chemistry, and print sessions.",
        tech: &["TypeScript", "SvelteKit", "PostgreSQL"],
        link: "github.com/icalloway/darkroom-db",
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { label: "Email", value: "iris@calloway.dev" },
    ContactLink { label: "GitHub", value: "github.com/icalloway" },
    ContactLink { label: "Site", value: "calloway.dev" },
];

/// Closing line under the contact links.
pub const SIGN_OFF: &str = "Currently open to staff-level systems roles.";
