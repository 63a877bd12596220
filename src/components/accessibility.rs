use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::utils::dom;

const OFFSCREEN_STYLE: &str =
    "position: absolute; left: -10000px; width: 1px; height: 1px; overflow: hidden;";

/// Reads `message` to screen readers through a short-lived polite live region.
pub fn announce(message: &str) {
    let (Ok(document), Ok(body)) = (dom::document(), dom::body()) else {
        return;
    };
    let Some(region) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let _ = region.set_attribute("role", "status");
    let _ = region.set_attribute("aria-live", "polite");
    let _ = region.set_attribute("style", OFFSCREEN_STYLE);
    region.set_text_content(Some(message));
    if body.append_child(&region).is_err() {
        return;
    }
    Timeout::new(config::get_config().announcement_lifetime_ms, move || region.remove())
        .forget();
}

#[derive(Properties, PartialEq)]
pub struct SkipLinkProps {
    pub target: AttrValue,
}

/// Hidden above the viewport until it receives keyboard focus.
#[function_component(SkipLink)]
pub fn skip_link(props: &SkipLinkProps) -> Html {
    let focused = use_state_eq(|| false);
    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };
    html! {
        <a class="skip-link"
            href={format!("#{}", props.target)}
            style={format!("top: {}", if *focused { "0" } else { "-40px" })}
            {onfocus}
            {onblur}
        >
            {"Skip to main content"}
        </a>
    }
}
