//! Footer

use leptos::prelude::*;

use crate::content::OWNER_NAME;
use crate::nav::{scroll_to_section, FOOTER_SECTIONS};

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div>
                    <div class="brand gradient-text">{OWNER_NAME}</div>
                    <p class="footer-copy">{format!("© {} {}. All rights reserved.", year, OWNER_NAME)}</p>
                </div>
                <div class="footer-links">
                    {FOOTER_SECTIONS.iter().map(|(label, id)| {
                        let id = *id;
                        view! {
                            <button class="footer-link" on:click=move |_| { scroll_to_section(id); }>
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </footer>
    }
}
