//! Scroll Navigator
//!
//! Section anchors and smooth scrolling to them.

use crate::config::{
    HERO_FADE_RANGE_PX, HERO_MAX_SHIFT_PX, HERO_SHIFT_RANGE_PX, NAVBAR_SCROLL_THRESHOLD_PX,
};
use crate::theme::Theme;

/// Navbar links (label, section id)
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("About", "about"),
    ("Projects", "projects"),
    ("Skills", "skills"),
    ("Contact", "contact"),
];

/// Footer quick links
pub const FOOTER_SECTIONS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("About", "about"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

/// Smooth-scroll to the element with `section_id`.
///
/// Silently does nothing when the id does not exist; returns whether a
/// scroll was requested.
pub fn scroll_to_section(section_id: &str) -> bool {
    let document = web_sys::window().and_then(|w| w.document());
    let found = scroll_to_section_in(
        section_id,
        |id| document.as_ref().and_then(|d| d.get_element_by_id(id)),
        |element| {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        },
    );
    if !found {
        web_sys::console::warn_1(&format!("[NAV] No section #{}", section_id).into());
    }
    found
}

/// Lookup-then-scroll; `scroll` only runs when `find` resolves the id
pub fn scroll_to_section_in<T>(
    section_id: &str,
    find: impl Fn(&str) -> Option<T>,
    scroll: impl FnOnce(&T),
) -> bool {
    let Some(target) = find(section_id) else {
        return false;
    };
    scroll(&target);
    true
}

/// Navbar background for the current theme and scroll offset
pub fn navbar_background(theme: Theme, scroll_y: f64) -> &'static str {
    let scrolled = scroll_y > NAVBAR_SCROLL_THRESHOLD_PX;
    match (theme, scrolled) {
        (Theme::Dark, true) => "rgba(17, 24, 39, 0.95)",
        (Theme::Dark, false) => "rgba(17, 24, 39, 0.9)",
        (Theme::Light, true) => "rgba(255, 255, 255, 0.95)",
        (Theme::Light, false) => "rgba(255, 255, 255, 0.9)",
    }
}

/// Hero content (translateY px, opacity) for the current scroll offset
pub fn hero_transform(scroll_y: f64) -> (f64, f64) {
    let y = scroll_y.max(0.0);
    let shift = y.min(HERO_SHIFT_RANGE_PX) * HERO_MAX_SHIFT_PX / HERO_SHIFT_RANGE_PX;
    let opacity = 1.0 - y.min(HERO_FADE_RANGE_PX) / HERO_FADE_RANGE_PX;
    (shift, opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_lowercase_labels() {
        for (label, id) in NAV_SECTIONS.iter().chain(FOOTER_SECTIONS) {
            assert_eq!(label.to_lowercase(), *id);
        }
    }

    #[test]
    fn test_navbar_background_deepens_after_threshold() {
        assert_eq!(navbar_background(Theme::Dark, 0.0), "rgba(17, 24, 39, 0.9)");
        assert_eq!(navbar_background(Theme::Dark, 100.0), "rgba(17, 24, 39, 0.9)");
        assert_eq!(navbar_background(Theme::Dark, 101.0), "rgba(17, 24, 39, 0.95)");
        assert_eq!(navbar_background(Theme::Light, 250.0), "rgba(255, 255, 255, 0.95)");
    }

    #[test]
    fn test_missing_section_does_not_scroll() {
        let mut scrolled = false;
        let found = scroll_to_section_in("nowhere", |_| None::<&str>, |_| scrolled = true);
        assert!(!found);
        assert!(!scrolled);
    }

    #[test]
    fn test_known_section_scrolls_once() {
        let mut targets = Vec::new();
        let found = scroll_to_section_in(
            "about",
            |id| NAV_SECTIONS.iter().find(|(_, s)| *s == id).map(|(_, s)| *s),
            |id| targets.push(*id),
        );
        assert!(found);
        assert_eq!(targets, vec!["about"]);
    }

    #[test]
    fn test_hero_transform_clamps() {
        assert_eq!(hero_transform(0.0), (0.0, 1.0));
        assert_eq!(hero_transform(150.0), (45.0, 0.5));
        assert_eq!(hero_transform(300.0), (90.0, 0.0));
        assert_eq!(hero_transform(500.0), (150.0, 0.0));
        assert_eq!(hero_transform(800.0), (150.0, 0.0));
        // Overscroll bounce
        assert_eq!(hero_transform(-40.0), (0.0, 1.0));
    }
}
