//! Toast View
//!
//! Renders the current notification; the store dismisses it on a timer.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_site_store, SiteStateStoreFields};

#[component]
pub fn ToastView() -> impl IntoView {
    let store = use_site_store();

    view! {
        {move || store.toast().get().map(|toast| {
            let id = toast.id;
            view! {
                <div id="toast" class=toast.class() role="status">
                    <span class="toast-icon">{toast.icon()}</span>
                    <div class="toast-body">
                        <div class="toast-title">{toast.title.clone()}</div>
                        <div class="toast-message">{toast.message.clone()}</div>
                    </div>
                    <button class="toast-close" on:click=move |_| store_dismiss_toast(&store, id)>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
