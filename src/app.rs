//! Portfolio App
//!
//! Splash screen, then the single-page layout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{
    About, ContactSection, Footer, Hero, Navbar, Projects, Skills, SplashScreen, ToastView,
};
use crate::config::SPLASH_DURATION_MS;
use crate::context::ThemeContext;
use crate::store::{AppPhase, SiteState, SiteStateStoreFields, SiteStore};
use crate::theme::{apply_theme, BrowserStorage, ThemeController};

/// Track window.scrollY for the navbar
fn bind_scroll_listener(store: SiteStore) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let win = window.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        if let Ok(y) = win.scroll_y() {
            store.scroll_y().set(y);
        }
    });
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

#[component]
pub fn App() -> impl IntoView {
    // Theme is read once at startup
    let controller = ThemeController::load(BrowserStorage);
    let initial_theme = controller.preference();
    apply_theme(initial_theme);

    let store = Store::new(SiteState::new(initial_theme));
    provide_context(store);
    provide_context(ThemeContext::new(controller, store));

    // Loading -> Ready after the splash
    spawn_local(async move {
        TimeoutFuture::new(SPLASH_DURATION_MS).await;
        store.phase().set(AppPhase::Ready);
        web_sys::console::log_1(&"[APP] Ready".into());
    });

    bind_scroll_listener(store);

    view! {
        <Show
            when=move || store.phase().get() == AppPhase::Ready
            fallback=|| view! { <SplashScreen /> }
        >
            <div class="page">
                <Navbar />
                <Hero />
                <About />
                <Projects />
                <Skills />
                <ContactSection />
                <Footer />
            </div>
        </Show>
        <ToastView />
    }
}
