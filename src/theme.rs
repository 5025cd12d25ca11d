//! Theme Controller
//!
//! Dark/light preference persisted in localStorage and applied as the
//! `light` class on the document root.

use crate::config::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything other than the two literals falls back to dark
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }

    /// Toggle button colours
    pub fn toggle_button_class(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-toggle theme-toggle-dark",
            Theme::Light => "theme-toggle theme-toggle-light",
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "☾",
            Theme::Light => "☀",
        }
    }
}

/// Key-value storage for the preference
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Browser localStorage; every failure degrades to "absent"
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Holds the current theme and writes every change through to the store
#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference once (dark if absent)
    pub fn load(store: S) -> Self {
        let current = store
            .load(THEME_STORAGE_KEY)
            .map(|v| Theme::parse(&v))
            .unwrap_or_default();
        Self { store, current }
    }

    pub fn preference(&self) -> Theme {
        self.current
    }

    /// Flip and persist; returns the new theme
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(THEME_STORAGE_KEY, self.current.as_str());
        self.current
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

/// Set or clear the `light` class on <html>
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.class_list().toggle_with_force("light", theme.is_light());
    web_sys::console::log_1(&format!("[THEME] Applied {}", theme.as_str()).into());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct MemoryStore {
        values: HashMap<String, String>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn save(&mut self, key: &str, value: &str) {
            self.values.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_defaults_to_dark_when_absent() {
        let controller = ThemeController::load(MemoryStore::default());
        assert_eq!(controller.preference(), Theme::Dark);
    }

    #[test]
    fn test_reads_persisted_light() {
        let mut store = MemoryStore::default();
        store.save(THEME_STORAGE_KEY, "light");
        let controller = ThemeController::load(store);
        assert_eq!(controller.preference(), Theme::Light);
    }

    #[test]
    fn test_unknown_value_falls_back_to_dark() {
        let mut store = MemoryStore::default();
        store.save(THEME_STORAGE_KEY, "sepia");
        assert_eq!(ThemeController::load(store).preference(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_each_flip() {
        let mut controller = ThemeController::load(MemoryStore::default());

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store().load(THEME_STORAGE_KEY).as_deref(), Some("light"));

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_double_toggle_restores_classes() {
        let mut controller = ThemeController::load(MemoryStore::default());
        let before = (controller.preference().is_light(), controller.preference().toggle_button_class());

        controller.toggle();
        controller.toggle();

        let after = (controller.preference().is_light(), controller.preference().toggle_button_class());
        assert_eq!(before, after);
    }
}
