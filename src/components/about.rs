//! About Section
//!
//! Bio card and the staggered "My Journey" timeline.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_reveal::{use_reveal, use_stagger, RevealOptions};

use crate::components::{Reveal, SectionHeader};
use crate::config::STAGGER_STEP_MS;
use crate::content::{ABOUT_PARAGRAPHS, LOCATION, TIMELINE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section section-alt">
            <div class="container">
                <SectionHeader title="About Me" />
                <div class="about-grid">
                    <Reveal class="about-content card">
                        <div class="about-location">
                            <span class="icon">"📍"</span>
                            <span>{LOCATION}</span>
                        </div>
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! {
                            <p class="about-text">{*p}</p>
                        }).collect_view()}
                    </Reveal>
                    <Timeline />
                </div>
            </div>
        </section>
    }
}

/// Entries animate 100ms apart once the timeline is visible
#[component]
fn Timeline() -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref, RevealOptions::default());
    let released = use_stagger(revealed, TIMELINE.len(), STAGGER_STEP_MS);

    view! {
        <div
            node_ref=node_ref
            class=move || if revealed.get() { "timeline-content reveal animate" } else { "timeline-content reveal" }
        >
            <h3 class="subsection-title">"My Journey"</h3>
            <div class="timeline">
                {TIMELINE.iter().enumerate().map(|(index, entry)| {
                    let class = move || {
                        if index < released.get() { "timeline-item animate" } else { "timeline-item" }
                    };
                    view! {
                        <div class=class>
                            <div class="timeline-icon">{entry.icon}</div>
                            <div>
                                <div class="timeline-year">{entry.year}</div>
                                <div class="timeline-event">{entry.event}</div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
