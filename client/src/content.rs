//! Static portfolio content passed into section components as props.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_TITLE: &str = "dumdles";
pub const DOCUMENT_TITLE: &str = "My Portfolio";
pub const OWNER_NAME: &str = "Dylan";
pub const HERO_HEADLINE: &str = "Creative Developer";
pub const HERO_IMAGE_URL: &str = "/images/dylan-hero.svg";
pub const LINKEDIN_USERNAME: &str = "dumdles";

/// Background, border, and text colour classes for a card surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardColors {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl CardColors {
    #[must_use]
    pub const fn new(background: &'static str, border: &'static str, text: &'static str) -> Self {
        Self { background, border, text }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hobby {
    pub title: &'static str,
    pub details: Option<&'static str>,
    pub image_url: &'static str,
    pub colors: CardColors,
    /// Spans two grid columns from the small breakpoint up.
    pub wide: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub details: &'static str,
    pub tenure: &'static str,
    pub colors: CardColors,
}

/// Shorter experience entry rendered as an info card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub title: &'static str,
    pub details: Option<&'static str>,
    pub year: Option<&'static str>,
    pub colors: CardColors,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "#home" },
    NavLink { label: "Hobbies", href: "#hobbies" },
    NavLink { label: "Experience", href: "#experience" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const HOBBIES: &[Hobby] = &[
    Hobby {
        title: "Design",
        details: None,
        image_url: "/images/design-hobby.svg",
        colors: CardColors::new("bg-green", "border-green", "text-green"),
        wide: false,
    },
    Hobby {
        title: "Media",
        details: None,
        image_url: "/images/media-hobby.svg",
        colors: CardColors::new("bg-blue", "border-blue", "text-blue"),
        wide: false,
    },
    Hobby {
        title: "Cycling",
        details: None,
        image_url: "/images/cycling-hobby.svg",
        colors: CardColors::new("bg-red", "border-red", "text-red"),
        wide: false,
    },
    Hobby {
        title: "Guitar",
        details: None,
        image_url: "/images/guitar-hobby.svg",
        colors: CardColors::new("bg-yellow", "border-yellow", "text-yellow"),
        wide: false,
    },
    Hobby {
        title: "Making new connections",
        details: None,
        image_url: "/images/connections-hobby.svg",
        colors: CardColors::new("bg-purple", "border-purple", "text-purple"),
        wide: true,
    },
    Hobby {
        title: "Serving the community",
        details: None,
        image_url: "/images/community-hobby.svg",
        colors: CardColors::new("bg-cyan", "border-cyan", "text-cyan"),
        wide: true,
    },
];

pub const ROLES: &[Role] = &[
    Role {
        title: "Electrical and Electronic Engineering Club",
        details: "PUBLICATIONS SECRETARY,",
        tenure: "2023-2024",
        colors: CardColors::new("bg-red-strong", "border-red-strong", "text-white"),
    },
    Role {
        title: "SP Infocomm Club",
        details: "PROGRAMME HEAD,",
        tenure: "2024-2025",
        colors: CardColors::new("bg-blue-strong", "border-blue-strong", "text-white"),
    },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        title: "Class Vice-Chairperson",
        details: None,
        year: Some("2021"),
        colors: CardColors::new("bg-amber", "border-amber", "text-amber"),
    },
    Milestone {
        title: "Robotics@APEX",
        details: Some("LOGISTICS HEAD,"),
        year: Some("2020-2021"),
        colors: CardColors::new("bg-yellow", "border-yellow", "text-yellow"),
    },
];
