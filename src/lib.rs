//! Interactive behavior for the Obsidian OS landing page: navigation,
//! feature tabs, the showcase carousel, scroll and pointer effects, and the
//! waitlist signup.

pub mod components;
pub mod config;
pub mod models;
pub mod pages;
pub mod utils;

use yew::prelude::*;

use crate::pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Landing /> }
}

/// Prints the console banner shown to curious visitors.
pub fn greet() {
    gloo_console::log!(
        "%c🔷 Obsidian OS 🔷",
        "color: #00d4ff; font-size: 24px; font-weight: bold; text-shadow: 0 0 10px rgba(0, 212, 255, 0.5);"
    );
    gloo_console::log!(
        "%cFortify Your Digital Frontier",
        "color: #7b2ff7; font-size: 14px; font-style: italic;"
    );
    gloo_console::log!(
        "%cInterested in joining our development team? Check out our careers page!",
        "color: #10b981; font-size: 12px;"
    );
}
