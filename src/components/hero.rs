//! Hero Section

use leptos::prelude::*;

use crate::config::STAR_COUNT;
use crate::content::{OWNER_NAME, SUBTAGLINE, TAGLINE};
use crate::download::download_cv;
use crate::nav::{hero_transform, scroll_to_section};
use crate::stars::scatter;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_site_store();
    let stars = scatter(STAR_COUNT, js_sys::Math::random);

    // Drift down and fade out as the page scrolls away
    let shift = move || format!("translateY({}px)", hero_transform(store.scroll_y().get()).0);
    let opacity = move || hero_transform(store.scroll_y().get()).1.to_string();

    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop"></div>
            <div class="stars-container">
                {stars.into_iter().map(|star| view! {
                    <div class="star" style=star.style()></div>
                }).collect_view()}
            </div>

            <div class="container hero-content" style:transform=shift style:opacity=opacity>
                <div class="hero-rise">
                    <h1 class="hero-title gradient-text">{OWNER_NAME}</h1>
                    <p class="hero-tagline">{TAGLINE}</p>
                    <p class="hero-subtagline">{SUBTAGLINE}</p>

                    <div class="hero-actions">
                        <button class="btn btn-primary" on:click=move |_| { scroll_to_section("projects"); }>
                            "✦ View My Work"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| download_cv()>
                            "⬇ Download CV"
                        </button>
                    </div>

                    <button class="scroll-hint" aria-label="Scroll to about" on:click=move |_| { scroll_to_section("about"); }>
                        "⌄"
                    </button>
                </div>
            </div>
        </section>
    }
}
