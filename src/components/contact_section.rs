//! Contact Section
//!
//! Direct channels and the message form posted to the form relay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Reveal, SectionHeader};
use crate::contact::ContactForm;
use crate::content::CONTACT_CHANNELS;
use crate::relay;
use crate::store::{store_show_toast, use_site_store};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <div class="container">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Ready to bring your vision to life? Let's collaborate on your next project!"
                />
                <div class="contact-grid">
                    <Reveal class="contact-info">
                        <h3 class="subsection-title">"Contact Information"</h3>
                        {CONTACT_CHANNELS.iter().map(|channel| {
                            let new_tab = channel.opens_new_tab();
                            view! {
                                <a
                                    class="contact-channel"
                                    href=channel.href
                                    target=new_tab.then_some("_blank")
                                    rel=new_tab.then_some("noopener noreferrer")
                                >
                                    <div class="contact-icon">{channel.icon}</div>
                                    <div>
                                        <div class="contact-label">{channel.label}</div>
                                        <div class="contact-value">{channel.value}</div>
                                    </div>
                                </a>
                            }
                        }).collect_view()}
                    </Reveal>
                    <Reveal class="contact-form card">
                        <ContactFormCard />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Controlled form; the submit button is disabled while a request is in flight
#[component]
fn ContactFormCard() -> impl IntoView {
    let store = use_site_store();
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(submission) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };
        web_sys::console::log_1(&"[CONTACT] Sending message".into());

        spawn_local(async move {
            let result = relay::submit_contact(&submission).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[CONTACT] {}", e).into());
            }
            if let Some(toast) = form.try_update(|f| f.finish(result)) {
                store_show_toast(&store, toast);
            }
        });
    };

    let sending = move || form.with(|f| f.is_sending());

    view! {
        <h3 class="subsection-title">"Send a Message"</h3>
        <form id="contact-form" class="contact-form-fields" on:submit=on_submit>
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                required=true
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
            />
            <input
                type="email"
                name="email"
                placeholder="Your Email"
                required=true
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <textarea
                name="message"
                placeholder="Your Message"
                rows="5"
                required=true
                prop:value=move || form.with(|f| f.message.clone())
                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
            ></textarea>
            <button id="submit-btn" type="submit" class="btn btn-primary btn-block" disabled=sending>
                <Show when=sending fallback=|| view! { <span class="btn-icon">"✉"</span> }>
                    <span class="loading-spinner"></span>
                </Show>
                <span>{move || form.with(|f| f.submit_label())}</span>
            </button>
        </form>
    }
}
