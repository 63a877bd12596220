use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent, PerformanceNavigationTiming};
use yew::prelude::*;

use crate::utils::dom::{self, EventListener};

/// Load duration from the navigation timing entry, once the load event finished.
fn load_time_ms() -> Option<f64> {
    let performance = dom::window().ok()?.performance()?;
    performance
        .get_entries_by_type("navigation")
        .iter()
        .filter_map(|entry| entry.dyn_into::<PerformanceNavigationTiming>().ok())
        .find(|timing| timing.load_event_end() > 0.0)
        .map(|timing| timing.load_event_end() - timing.load_event_start())
}

fn log_load_time() {
    if let Some(ms) = load_time_ms() {
        log::info!("Page Load Time: {} ms", ms);
    }
}

fn watch_color_scheme() -> Option<EventListener> {
    let query: MediaQueryList = dom::window()
        .ok()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    let listener = EventListener::new(&query, "change", |event| {
        let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
            return;
        };
        if event.matches() {
            log::info!("User prefers dark mode");
        } else {
            log::info!("User prefers light mode");
        }
    });
    dom::optional("Color scheme watcher", listener)
}

fn watch_load() -> Option<EventListener> {
    if load_time_ms().is_some() {
        log_load_time();
        return None;
    }
    let window = dom::window().ok()?;
    // loadEventEnd is only filled in after the load handlers return
    let listener = EventListener::new(&window, "load", |_| {
        Timeout::new(0, log_load_time).forget();
    });
    dom::optional("Load timing", listener)
}

/// Page-wide hookups that belong to no single section.
#[hook]
pub fn use_page_lifecycle() {
    use_effect_with_deps(
        |_| {
            if let Ok(body) = dom::body() {
                let _ = body.class_list().add_1("loaded");
            }
            log::info!("Obsidian OS website loaded successfully");
            let listeners: Vec<EventListener> =
                [watch_color_scheme(), watch_load()].into_iter().flatten().collect();
            move || drop(listeners)
        },
        (),
    );
}
