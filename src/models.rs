//! Site Models
//!
//! Data structures for the hard-coded portfolio content.

/// What a project card links to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Video,
    Image,
    Website,
}

impl MediaType {
    /// Label of the overlay button
    pub fn action_label(&self) -> &'static str {
        match self {
            MediaType::Video => "Watch Video",
            MediaType::Image | MediaType::Website => "View Project",
        }
    }

    pub fn action_icon(&self) -> &'static str {
        match self {
            MediaType::Video => "▶",
            MediaType::Image | MediaType::Website => "↗",
        }
    }
}

/// Project link target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    External(&'static str),
    /// No public link yet, opens "#"
    Placeholder,
    /// The portfolio itself, resolved from window.location at click time
    CurrentPage,
}

impl ProjectLink {
    /// Resolve to a URL given the current page address (if known)
    pub fn resolve(&self, current_page: Option<&str>) -> String {
        match self {
            ProjectLink::External(url) => url.to_string(),
            ProjectLink::Placeholder => "#".to_string(),
            ProjectLink::CurrentPage => current_page.unwrap_or("#").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub image: &'static str,
    pub link: ProjectLink,
    pub media: MediaType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub event: &'static str,
    pub icon: &'static str,
}

/// Skill with proficiency percentage (0-100)
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

impl Skill {
    /// Bar fill percentage, clamped to 100
    pub fn fill_percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

/// Count-up statistic
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub target: u32,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

impl ContactChannel {
    /// Web links open in a new tab; mailto:/tel: stay in place
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_action_label() {
        assert_eq!(MediaType::Video.action_label(), "Watch Video");
        assert_eq!(MediaType::Image.action_label(), "View Project");
        assert_eq!(MediaType::Website.action_label(), "View Project");
    }

    #[test]
    fn test_project_link_resolve() {
        let page = Some("https://example.com/");
        assert_eq!(ProjectLink::External("https://youtu.be/x").resolve(page), "https://youtu.be/x");
        assert_eq!(ProjectLink::Placeholder.resolve(page), "#");
        assert_eq!(ProjectLink::CurrentPage.resolve(page), "https://example.com/");
        assert_eq!(ProjectLink::CurrentPage.resolve(None), "#");
    }

    #[test]
    fn test_skill_fill_is_clamped() {
        let skill = Skill { name: "Overachiever", level: 140 };
        assert_eq!(skill.fill_percent(), 100);
        let skill = Skill { name: "CapCut", level: 98 };
        assert_eq!(skill.fill_percent(), 98);
    }

    #[test]
    fn test_contact_channel_new_tab() {
        let mail = ContactChannel { label: "Email", value: "a@b.c", href: "mailto:a@b.c", icon: "✉" };
        let web = ContactChannel { label: "Instagram", value: "@x", href: "https://instagram.com/x", icon: "◎" };
        assert!(!mail.opens_new_tab());
        assert!(web.opens_new_tab());
    }
}
