//! Skills Section
//!
//! Skill bars that fill on reveal and the count-up statistics row.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_reveal::{use_reveal, use_stagger, RevealOptions};

use crate::components::SectionHeader;
use crate::config::{COUNTER_TICK_MS, STAGGER_STEP_MS};
use crate::content::{SKILL_CATEGORIES, STATS};
use crate::counter::CountUp;
use crate::models::{SkillCategory, Stat};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section section-alt">
            <div class="container">
                <SectionHeader title="Skills & Tools" />
                <div class="skills-grid">
                    {SKILL_CATEGORIES.iter().map(|category| view! {
                        <SkillCategoryCard category=category />
                    }).collect_view()}
                </div>
                <StatsRow />
            </div>
        </section>
    }
}

#[component]
fn SkillCategoryCard(category: &'static SkillCategory) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref, RevealOptions::default());
    let released = use_stagger(revealed, category.skills.len(), STAGGER_STEP_MS);

    view! {
        <div
            node_ref=node_ref
            class=move || if revealed.get() { "skill-category card reveal animate" } else { "skill-category card reveal" }
        >
            <div class="skill-category-header">
                <div class="skill-category-icon">{category.icon}</div>
                <h3 class="skill-category-title">{category.title}</h3>
            </div>
            <div class="skill-list">
                {category.skills.iter().enumerate().map(|(index, skill)| {
                    let percent = skill.fill_percent();
                    let animated = move || index < released.get();
                    view! {
                        <div class="skill">
                            <div class="skill-row">
                                <span class="skill-name">{skill.name}</span>
                                <span class="skill-level">{format!("{}%", percent)}</span>
                            </div>
                            <div class="skill-track">
                                <div
                                    class=move || if animated() { "skill-bar animate" } else { "skill-bar" }
                                    style:width=move || if animated() { format!("{}%", percent) } else { "0%".to_string() }
                                ></div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Counters start 100ms apart once the row is visible
#[component]
fn StatsRow() -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref, RevealOptions::default());
    let released = use_stagger(revealed, STATS.len(), STAGGER_STEP_MS);

    view! {
        <div
            node_ref=node_ref
            class=move || if revealed.get() { "stats-container reveal animate" } else { "stats-container reveal" }
        >
            {STATS.iter().enumerate().map(|(index, stat)| view! {
                <StatCounter stat=stat started=Signal::derive(move || index < released.get()) />
            }).collect_view()}
        </div>
    }
}

#[component]
fn StatCounter(stat: &'static Stat, #[prop(into)] started: Signal<bool>) -> impl IntoView {
    let counter = CountUp::new(stat.target);
    let (text, set_text) = signal(counter.initial());
    let mut running = false;

    Effect::new(move |_| {
        if running || !started.get() {
            return;
        }
        running = true;
        let frames = counter.clone();
        spawn_local(async move {
            for frame in frames {
                TimeoutFuture::new(COUNTER_TICK_MS).await;
                set_text.set(frame);
            }
        });
    });

    view! {
        <div class="stat">
            <div class="stat-number gradient-text">{move || text.get()}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
