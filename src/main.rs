#![allow(warnings)]
//! Portfolio Frontend Entry Point

mod models;
mod config;
mod content;
mod theme;
mod nav;
mod contact;
mod relay;
mod counter;
mod stars;
mod toast;
mod download;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
