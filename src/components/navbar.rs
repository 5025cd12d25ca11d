//! Navigation Bar
//!
//! Fixed top bar with section links and the theme toggle.

use leptos::prelude::*;

use crate::content::OWNER_NAME;
use crate::context::use_theme_context;
use crate::nav::{navbar_background, scroll_to_section, NAV_SECTIONS};
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_site_store();
    let theme_ctx = use_theme_context();

    let background = move || navbar_background(store.theme().get(), store.scroll_y().get());

    view! {
        <nav id="navbar" class="navbar nav-slide-down" style:background-color=background>
            <div class="container navbar-inner">
                <button class="brand gradient-text" on:click=move |_| { scroll_to_section("home"); }>
                    {OWNER_NAME}
                </button>
                <div class="navbar-right">
                    <div class="navbar-links">
                        {NAV_SECTIONS.iter().map(|(label, id)| {
                            let id = *id;
                            view! {
                                <button class="nav-link" on:click=move |_| { scroll_to_section(id); }>
                                    {*label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                    <button
                        id="theme-toggle"
                        class=move || store.theme().get().toggle_button_class()
                        title="Toggle theme"
                        on:click=move |_| theme_ctx.toggle()
                    >
                        <span class="theme-icon">{move || store.theme().get().toggle_icon()}</span>
                        <span class="sr-only">"Toggle theme"</span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
