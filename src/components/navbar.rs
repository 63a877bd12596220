use std::cell::Cell;
use std::rc::Rc;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::models::effects::{anchor_scroll_top, navbar_scrolled};
use crate::utils::dom::{self, EventListener};

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: AttrValue,
    pub links: Vec<NavLink>,
}

/// Smooth-scrolls so the `#fragment` section sits just below the fixed navbar.
pub fn scroll_to_section(href: &str) {
    let Some(section) = dom::query_html(href) else {
        log::debug!("No section for {}", href);
        return;
    };
    let Ok(window) = dom::window() else {
        return;
    };
    let navbar_height = dom::query_html(".navbar")
        .map(|nav| f64::from(nav.offset_height()))
        .unwrap_or(0.0);
    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(section.offset_top()), navbar_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let threshold = config::get_config().navbar_scroll_threshold;
                let listener = dom::window().and_then(|window| {
                    let last_scroll = Rc::new(Cell::new(0.0));
                    let ticking = Rc::new(Cell::new(false));
                    let scroll_window = window.clone();
                    EventListener::passive(&window, "scroll", move |_| {
                        last_scroll.set(scroll_window.scroll_y().unwrap_or(0.0));
                        if ticking.replace(true) {
                            return;
                        }
                        let scrolled = scrolled.clone();
                        let last_scroll = last_scroll.clone();
                        let ticking = ticking.clone();
                        dom::request_frame(move || {
                            scrolled.set(navbar_scrolled(last_scroll.get(), threshold));
                            ticking.set(false);
                        });
                    })
                });
                let listener = dom::optional("Navbar scroll state", listener);
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="nav-container">
                <a href="#hero" class="nav-brand">{props.brand.clone()}</a>
                <button
                    class="mobile-menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span><span></span><span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for props.links.iter().map(|link| {
                        let href = link.href;
                        let onclick = {
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                menu_open.set(false);
                                if !href.starts_with('#') {
                                    return;
                                }
                                e.prevent_default();
                                scroll_to_section(href);
                            })
                        };
                        html! {
                            <li><a class="nav-link" {href} {onclick}>{link.label}</a></li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}
