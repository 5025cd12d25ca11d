//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::TOAST_DURATION_MS;
use crate::theme::Theme;
use crate::toast::Toast;

/// Splash state machine: Loading -> Ready, nothing after that
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Loading,
    Ready,
}

/// Page-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    pub phase: AppPhase,
    pub theme: Theme,
    /// Current window.scrollY, for the navbar background
    pub scroll_y: f64,
    pub toast: Option<Toast>,
    /// Last issued toast id
    pub toast_seq: u32,
}

impl SiteState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a toast and schedule its dismissal; a newer toast is never cleared
/// by an older timer
pub fn store_show_toast(store: &SiteStore, mut toast: Toast) {
    let id = store.toast_seq().get_untracked() + 1;
    store.toast_seq().set(id);
    toast.id = id;
    store.toast().set(Some(toast));

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        store_dismiss_toast(&store, id);
    });
}

/// Clear the toast if it is still the one with `id`
pub fn store_dismiss_toast(store: &SiteStore, id: u32) {
    let current = store.toast().with_untracked(|t| t.as_ref().map(|t| t.id));
    if current == Some(id) {
        store.toast().set(None);
    }
}
