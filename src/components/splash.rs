//! Splash Screen
//!
//! Shown while the app is in the Loading phase.

use leptos::prelude::*;

#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div id="loading-screen" class="splash">
            <div class="splash-inner">
                <div class="spinner"></div>
                <p class="splash-text">"Loading Portfolio..."</p>
            </div>
        </div>
    }
}
