use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::models::effects::{
    stagger_delay, timeline_transition, RevealEffect, RevealRule, REVEALS,
};
use crate::utils::dom;

/// Disconnects when dropped.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn set_styles(element: &Element, styles: &[(&str, &str)]) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();
    for (name, value) in styles {
        let _ = style.set_property(name, value);
    }
}

fn reveal(element: &Element, effect: RevealEffect) {
    match effect {
        RevealEffect::AddClass(class) => {
            let _ = element.class_list().add_1(class);
        }
        RevealEffect::SlideIn => {
            set_styles(element, &[("opacity", "1"), ("transform", "translateX(0)")]);
        }
    }
}

fn prepare(targets: &[Element], effect: RevealEffect) {
    if effect != RevealEffect::SlideIn {
        return;
    }
    for (index, element) in targets.iter().enumerate() {
        set_styles(
            element,
            &[
                ("opacity", "0"),
                ("transform", "translateX(-30px)"),
                ("transition", timeline_transition(index).as_str()),
            ],
        );
    }
}

fn observe(rule: &RevealRule) -> Option<RevealObserver> {
    let targets = dom::query_all(rule.selector);
    if targets.is_empty() {
        log::debug!("Nothing to reveal for {}", rule.selector);
        return None;
    }
    prepare(&targets, rule.effect);

    let effect = rule.effect;
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target, effect);
                    // reveals are one-shot
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(rule.threshold));
    if let Some(margin) = rule.root_margin {
        init.set_root_margin(margin);
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            Some(RevealObserver {
                observer,
                _callback: callback,
            })
        }
        Err(e) => {
            log::warn!(
                "IntersectionObserver unavailable ({:?}), revealing {} now",
                e,
                rule.selector
            );
            for target in &targets {
                reveal(target, effect);
            }
            None
        }
    }
}

fn stagger_testimonials() {
    for (index, card) in dom::query_all(".testimonial-card").iter().enumerate() {
        set_styles(card, &[("animation-delay", stagger_delay(index).as_str())]);
    }
}

/// Installs the one-shot scroll reveals for everything already on the page.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let observers: Vec<RevealObserver> = REVEALS.iter().filter_map(observe).collect();
            stagger_testimonials();
            move || drop(observers)
        },
        (),
    );
}
