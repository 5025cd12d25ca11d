//! Application Context
//!
//! Theme controller shared via Leptos Context API.

use leptos::prelude::*;

use crate::store::{SiteStateStoreFields, SiteStore};
use crate::theme::{apply_theme, BrowserStorage, ThemeController};

/// Toggling the theme touches storage, the document root and the store
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: StoredValue<ThemeController<BrowserStorage>>,
    store: SiteStore,
}

impl ThemeContext {
    pub fn new(controller: ThemeController<BrowserStorage>, store: SiteStore) -> Self {
        Self {
            controller: StoredValue::new(controller),
            store,
        }
    }

    /// Flip, persist and apply
    pub fn toggle(&self) {
        if let Some(theme) = self.controller.try_update_value(|c| c.toggle()) {
            apply_theme(theme);
            self.store.theme().set(theme);
        }
    }
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
