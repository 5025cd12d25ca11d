//! Reveal Wrapper
//!
//! Div that gets the `animate` class the first time it scrolls into view.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_reveal::{use_reveal, RevealOptions};

#[component]
pub fn Reveal(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref, RevealOptions::default());

    let class_name = move || {
        if revealed.get() {
            format!("{} reveal animate", class)
        } else {
            format!("{} reveal", class)
        }
    };

    view! {
        <div node_ref=node_ref class=class_name>
            {children()}
        </div>
    }
}

/// Section title with divider and optional lead paragraph
#[component]
pub fn SectionHeader(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal class="section-header">
            <h2 class="section-title gradient-text">{title}</h2>
            <div class="section-divider"></div>
            {subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> })}
        </Reveal>
    }
}
