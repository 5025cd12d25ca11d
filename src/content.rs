//! Portfolio Content
//!
//! Everything rendered on the page that is not layout.

use crate::models::{
    ContactChannel, MediaType, Project, ProjectLink, Skill, SkillCategory, Stat, TimelineEntry,
};

pub const OWNER_NAME: &str = "Tanvin Waseef";
pub const TAGLINE: &str = "Passionate Video Editor, Image Editor & Prompt Engineer";
pub const SUBTAGLINE: &str = "Transforming ideas into compelling visual content since 2020";
pub const LOCATION: &str = "Born in 2008, Dhaka, Bangladesh";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I am a passionate video editor who started my journey in 2020. Since then, I have edited several hundred videos and specialized in image redesigning and AI prompting.",
    "I learned editing from LinkedIn and YouTube, beginning with mobile apps like CapCut, KineMaster, and Alight Motion. Now I work with professional tools like Adobe Premiere Pro, After Effects, and Audacity.",
    "My goal is to transform ideas into compelling visual content that tells stories and engages audiences.",
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry { year: "2020", event: "Started video editing journey", icon: "🎬" },
    TimelineEntry { year: "2021", event: "Mastered mobile editing apps", icon: "⚡" },
    TimelineEntry { year: "2022", event: "Transitioned to professional tools", icon: "★" },
    TimelineEntry { year: "2023", event: "Specialized in AI prompting", icon: "</>" },
    TimelineEntry { year: "2024", event: "Hundreds of videos edited", icon: "✦" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Demo Video Showcase",
        description: "A portfolio demo reel showcasing smooth transitions and visual editing expertise.",
        tools: &["Premiere Pro", "After Effects"],
        image: "/images/project-1.png",
        link: ProjectLink::External("https://youtu.be/PEc9FbbIIhw?si=nxK-ZkZQ6O8i-MYf"),
        media: MediaType::Video,
    },
    Project {
        title: "Featured Design",
        description: "A minimalist visual design crafted for brand identity and digital presence.",
        tools: &["Photoshop", "After Effects"],
        image: "/images/project-2.png",
        link: ProjectLink::Placeholder,
        media: MediaType::Image,
    },
    Project {
        title: "Stylish Visual Edit",
        description: "A modern, upbeat video edit designed for digital platforms and social engagement.",
        tools: &["Premiere Pro", "After Effects"],
        image: "/images/project-3.png",
        link: ProjectLink::External("https://youtu.be/sbfKUVtmMZE?si=dI4rK_zvTEjgpbUW"),
        media: MediaType::Video,
    },
    Project {
        title: "Portfolio Website",
        description: "A modern portfolio site to showcase my professional editing, design, and branding capabilities.",
        tools: &["Rust", "Leptos", "WebAssembly"],
        image: "/images/portfolio-website.png",
        link: ProjectLink::CurrentPage,
        media: MediaType::Website,
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Video Editing",
        icon: "🎬",
        skills: &[
            Skill { name: "Adobe Premiere Pro", level: 95 },
            Skill { name: "After Effects", level: 90 },
            Skill { name: "CapCut", level: 98 },
            Skill { name: "KineMaster", level: 95 },
        ],
    },
    SkillCategory {
        title: "Audio Editing",
        icon: "⚡",
        skills: &[
            Skill { name: "Audacity", level: 85 },
            Skill { name: "Audio Sync", level: 90 },
            Skill { name: "Sound Design", level: 80 },
            Skill { name: "Voice Enhancement", level: 85 },
        ],
    },
    SkillCategory {
        title: "Creative Tools",
        icon: "🖼",
        skills: &[
            Skill { name: "AI Prompting", level: 92 },
            Skill { name: "Image Redesign", level: 88 },
            Skill { name: "Alight Motion", level: 90 },
            Skill { name: "Color Grading", level: 85 },
        ],
    },
];

pub const STATS: &[Stat] = &[
    Stat { target: 500, label: "Videos Edited" },
    Stat { target: 15, label: "Tools Mastered" },
    Stat { target: 4, label: "Years Experience" },
    Stat { target: 100, label: "Client Satisfaction" },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "tanvinwaseef15@gmail.com",
        href: "mailto:tanvinwaseef15@gmail.com",
        icon: "✉",
    },
    ContactChannel {
        label: "Phone",
        value: "+8801960405887",
        href: "tel:+8801960405887",
        icon: "☎",
    },
    ContactChannel {
        label: "Instagram",
        value: "@tha_introvert_bro",
        href: "https://instagram.com/tha_introvert_bro",
        icon: "◎",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
            }
        }
    }

    #[test]
    fn test_only_satisfaction_stat_is_a_percentage() {
        let hundreds: Vec<_> = STATS.iter().filter(|s| s.target == 100).collect();
        assert_eq!(hundreds.len(), 1);
        assert_eq!(hundreds[0].label, "Client Satisfaction");
    }

    #[test]
    fn test_video_projects_link_out() {
        for project in PROJECTS.iter().filter(|p| p.media == MediaType::Video) {
            assert!(matches!(project.link, ProjectLink::External(url) if url.starts_with("https://")));
        }
    }

    #[test]
    fn test_timeline_is_chronological() {
        let years: Vec<&str> = TIMELINE.iter().map(|e| e.year).collect();
        let mut sorted = years.clone();
        sorted.sort();
        assert_eq!(years, sorted);
    }
}
