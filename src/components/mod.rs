//! UI Components
//!
//! Page sections and reusable Leptos components.

mod reveal;
mod splash;
mod navbar;
mod hero;
mod about;
mod projects;
mod skills;
mod contact_section;
mod footer;
mod toast_view;

pub use reveal::{Reveal, SectionHeader};
pub use splash::SplashScreen;
pub use navbar::Navbar;
pub use hero::Hero;
pub use about::About;
pub use projects::Projects;
pub use skills::Skills;
pub use contact_section::ContactSection;
pub use footer::Footer;
pub use toast_view::ToastView;
